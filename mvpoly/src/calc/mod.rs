mod cmd;
mod err;

use std::fmt::Display;
use log::trace;
use num_traits::Zero;

use crate::{Poly, PolyStack};

pub use cmd::Cmd;
pub use err::CalcError;

/// What a command prints.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Output<'a> {
    Flag(bool),
    Deg(i64),
    Poly(&'a Poly)
}

impl Display for Output<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Flag(b) => write!(f, "{}", u8::from(*b)),
            Output::Deg(d)  => write!(f, "{d}"),
            Output::Poly(p) => write!(f, "{p}")
        }
    }
}

/// Executes commands against a stack of polynomials.
///
/// A command that lacks operands returns `StackUnderflow`
/// and leaves the stack as it was.
#[derive(Clone, Default, Debug)]
pub struct Calc {
    stack: PolyStack
}

impl Calc {
    pub fn new() -> Self {
        Self { stack: PolyStack::new() }
    }

    pub fn stack(&self) -> &PolyStack {
        &self.stack
    }

    pub fn push(&mut self, p: Poly) {
        self.stack.push(p)
    }

    pub fn exec(&mut self, cmd: &Cmd) -> Result<Option<Output<'_>>, CalcError> {
        trace!("exec: {cmd} (stack: {})", self.stack.len());

        let out = match *cmd {
            Cmd::Zero => {
                self.stack.push(Poly::zero());
                None
            },
            Cmd::IsCoeff => Some(Output::Flag(self.top()?.all_exps_zero())),
            Cmd::IsZero  => Some(Output::Flag(self.top()?.is_zero())),
            Cmd::Clone => {
                let p = self.top()?.clone();
                self.stack.push(p);
                None
            },
            Cmd::Add => self.binary(|p, q| p + q).map(|_| None)?,
            Cmd::Mul => self.binary(|p, q| p * q).map(|_| None)?,
            Cmd::Sub => self.binary(|p, q| p - q).map(|_| None)?,
            Cmd::Neg => self.unary(|p| -p).map(|_| None)?,
            Cmd::IsEq => {
                let (p, q) = (self.second()?, self.top()?);
                Some(Output::Flag(p == q))
            },
            Cmd::Deg      => Some(Output::Deg(self.top()?.deg())),
            Cmd::DegBy(i) => Some(Output::Deg(self.top()?.deg_by(i))),
            Cmd::At(x)    => self.unary(|p| p.at(x)).map(|_| None)?,
            Cmd::Compose(k) => self.compose(k).map(|_| None)?,
            Cmd::Print => Some(Output::Poly(self.top()?)),
            Cmd::Pop => {
                self.stack.pop().ok_or(CalcError::StackUnderflow)?;
                None
            }
        };

        Ok(out)
    }

    fn top(&self) -> Result<&Poly, CalcError> {
        self.stack.top().ok_or(CalcError::StackUnderflow)
    }

    fn second(&self) -> Result<&Poly, CalcError> {
        self.stack.second().ok_or(CalcError::StackUnderflow)
    }

    fn unary<F>(&mut self, f: F) -> Result<(), CalcError>
    where F: FnOnce(Poly) -> Poly {
        let p = self.stack.pop().ok_or(CalcError::StackUnderflow)?;
        self.stack.push(f(p));
        Ok(())
    }

    // `f` receives (second, top).
    fn binary<F>(&mut self, f: F) -> Result<(), CalcError>
    where F: FnOnce(Poly, Poly) -> Poly {
        let (p, q) = self.stack.pop2().ok_or(CalcError::StackUnderflow)?;
        self.stack.push(f(p, q));
        Ok(())
    }

    // the top is the base, the one deepest down substitutes x₀.
    fn compose(&mut self, k: usize) -> Result<(), CalcError> {
        let mut polys = k.checked_add(1)
            .and_then(|n| self.stack.pop_n(n))
            .ok_or(CalcError::StackUnderflow)?;
        let p = polys.pop().ok_or(CalcError::StackUnderflow)?;
        self.stack.push(p.compose(&polys));
        Ok(())
    }
}
