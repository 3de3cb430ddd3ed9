use std::fmt::{Display, Debug};
use itertools::Itertools;
use num_traits::{Zero, One};

use crate::Coeff;
use super::Mono;

// A polynomial in the variable xᵢ is either a bare constant, or a sum
// of monomials whose coefficients are polynomials in xᵢ₊₁.
// The variable index is never stored; it is the nesting depth.
//
// Invariants of `Sum`:
//  - exponents are strictly decreasing,
//  - no coefficient is zero,
//  - it is not a single exp-0 term over a constant (that is `Const`).
// Zero is always `Const(0)`.

#[derive(Clone)]
enum Repr {
    Const(Coeff),
    Sum(Vec<Mono>)
}

#[derive(Clone)]
pub struct Poly {
    repr: Repr
}

impl Poly {
    pub fn from_const(c: Coeff) -> Self {
        Self { repr: Repr::Const(c) }
    }

    /// Builds a polynomial from monomials given in any order.
    /// Terms with equal exponents are summed, zero terms are dropped,
    /// and the result is brought into normal form.
    pub fn from_monos(monos: Vec<Mono>) -> Self {
        let monos = monos.into_iter()
            .sorted_by(|m1, m2| m2.exp().cmp(&m1.exp()))
            .coalesce(|m1, m2|
                if m1.exp() == m2.exp() {
                    let (p1, e) = m1.into_parts();
                    let (p2, _) = m2.into_parts();
                    Ok(Mono::new(p1 + p2, e))
                } else {
                    Err((m1, m2))
                }
            )
            .filter(|m| !m.coeff().is_zero())
            .collect();

        Self::from_sorted(monos)
    }

    pub fn from_mono_slice(monos: &[Mono]) -> Self {
        Self::from_monos(monos.to_vec())
    }

    // `monos` must already be strictly decreasing in exponent,
    // with every coefficient nonzero and normalized.
    pub(super) fn from_sorted(monos: Vec<Mono>) -> Self {
        if let [m] = monos.as_slice() {
            if let (0, Some(c)) = (m.exp(), m.coeff().as_const()) {
                return Self::from_const(c)
            }
        }

        if monos.is_empty() {
            Self::zero()
        } else {
            Self { repr: Repr::Sum(monos) }
        }
    }

    /// Whether `self` is held in constant form.
    pub fn is_const(&self) -> bool {
        matches!(self.repr, Repr::Const(_))
    }

    pub fn as_const(&self) -> Option<Coeff> {
        match self.repr {
            Repr::Const(c) => Some(c),
            Repr::Sum(_) => None
        }
    }

    /// Whether `self` is a scalar, following chains of single
    /// exp-0 terms down to a constant.
    pub fn all_exps_zero(&self) -> bool {
        self.to_scalar().is_some()
    }

    /// The scalar `self` denotes, if [`Self::all_exps_zero`] holds.
    pub fn to_scalar(&self) -> Option<Coeff> {
        match &self.repr {
            Repr::Const(c) => Some(*c),
            Repr::Sum(monos) => match monos.as_slice() {
                [m] if m.exp() == 0 => m.coeff().to_scalar(),
                _ => None
            }
        }
    }

    /// Monomials in decreasing order of exponent.
    /// Empty for a polynomial in constant form.
    pub fn monos(&self) -> &[Mono] {
        match &self.repr {
            Repr::Const(_) => &[],
            Repr::Sum(monos) => monos
        }
    }

    pub fn nterms(&self) -> usize {
        match &self.repr {
            Repr::Const(c) => if c.is_zero() { 0 } else { 1 },
            Repr::Sum(monos) => monos.len()
        }
    }

    /// Monomials of `self`, with a nonzero constant `c` given as `(c, 0)`.
    pub fn into_monos(self) -> Vec<Mono> {
        match self.repr {
            Repr::Const(c) if c.is_zero() => vec![],
            Repr::Const(c) => vec![Mono::new(Self::from_const(c), 0)],
            Repr::Sum(monos) => monos
        }
    }

    // multiplies every leaf coefficient by `a`.
    pub(super) fn scale(&self, a: Coeff) -> Self {
        match &self.repr {
            Repr::Const(c) => Self::from_const(c.wrapping_mul(a)),
            Repr::Sum(monos) => Self::from_sorted(
                monos.iter()
                    .map(|m| Mono::new(m.coeff().scale(a), m.exp()))
                    .filter(|m| !m.coeff().is_zero())
                    .collect()
            )
        }
    }
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Coeff> for Poly {
    fn from(c: Coeff) -> Self {
        Self::from_const(c)
    }
}

impl From<Mono> for Poly {
    fn from(m: Mono) -> Self {
        Self::from_monos(vec![m])
    }
}

impl FromIterator<Mono> for Poly {
    fn from_iter<T: IntoIterator<Item = Mono>>(iter: T) -> Self {
        Self::from_monos(iter.into_iter().collect())
    }
}

impl PartialEq for Poly {
    fn eq(&self, other: &Self) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Const(a), Repr::Const(b)) => a == b,
            (Repr::Sum(ms), Repr::Sum(ns))   => ms == ns,
            (Repr::Const(a), Repr::Sum(_))   => other.to_scalar() == Some(*a),
            (Repr::Sum(_), Repr::Const(b))   => self.to_scalar() == Some(*b),
        }
    }
}

impl Eq for Poly {}

impl Zero for Poly {
    fn zero() -> Self {
        Self::from_const(0)
    }

    fn is_zero(&self) -> bool {
        matches!(self.repr, Repr::Const(0))
    }
}

impl One for Poly {
    fn one() -> Self {
        Self::from_const(1)
    }

    fn is_one(&self) -> bool {
        self.to_scalar() == Some(1)
    }
}

impl Display for Poly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(c) = self.to_scalar() {
            write!(f, "{c}")
        } else {
            write!(f, "{}", self.monos().iter().join("+"))
        }
    }
}

impl Debug for Poly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
