use std::str::FromStr;
use derive_more::Display;

use crate::Coeff;
use super::CalcError;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum Cmd {
    #[display("ZERO")]     Zero,
    #[display("IS_COEFF")] IsCoeff,
    #[display("IS_ZERO")]  IsZero,
    #[display("CLONE")]    Clone,
    #[display("ADD")]      Add,
    #[display("MUL")]      Mul,
    #[display("NEG")]      Neg,
    #[display("SUB")]      Sub,
    #[display("IS_EQ")]    IsEq,
    #[display("DEG")]      Deg,
    #[display("DEG_BY {_0}")]
    DegBy(usize),
    #[display("AT {_0}")]
    At(Coeff),
    #[display("PRINT")]    Print,
    #[display("POP")]      Pop,
    #[display("COMPOSE {_0}")]
    Compose(usize),
}

// commands taking one argument, with the error for a malformed argument.
const ARG_CMDS: [(&str, CalcError); 3] = [
    ("AT",      CalcError::AtWrongValue),
    ("DEG_BY",  CalcError::DegByWrongVariable),
    ("COMPOSE", CalcError::ComposeWrongParameter),
];

impl Cmd {
    /// The error for a line that names a command but cannot be read,
    /// e.g. one containing a NUL byte.
    pub fn error_for(line: &str) -> CalcError {
        ARG_CMDS.iter()
            .find(|(name, _)|
                line.strip_prefix(name)
                    .and_then(|rest| rest.chars().next())
                    .is_some_and(is_space)
            )
            .map(|(_, e)| *e)
            .unwrap_or(CalcError::WrongCommand)
    }

    fn parse_with_arg(s: &str) -> Result<Self, CalcError> {
        let Some((name, rest, e)) = ARG_CMDS.iter().find_map(|(name, e)| {
            let rest = s.strip_prefix(name)?;
            if rest.is_empty() || rest.starts_with(is_space) {
                Some((*name, rest, *e))
            } else {
                None
            }
        }) else {
            return Err(CalcError::WrongCommand)
        };

        let arg = rest.strip_prefix(' ').ok_or(e)?;
        let cmd = match name {
            "AT"     => parse_arg(arg, true).map(Cmd::At),
            "DEG_BY" => parse_arg(arg, false).map(Cmd::DegBy),
            _        => parse_arg(arg, false).map(Cmd::Compose),
        };
        cmd.ok_or(e)
    }
}

impl FromStr for Cmd {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cmd = match s {
            "ZERO"     => Cmd::Zero,
            "IS_COEFF" => Cmd::IsCoeff,
            "IS_ZERO"  => Cmd::IsZero,
            "CLONE"    => Cmd::Clone,
            "ADD"      => Cmd::Add,
            "MUL"      => Cmd::Mul,
            "NEG"      => Cmd::Neg,
            "SUB"      => Cmd::Sub,
            "IS_EQ"    => Cmd::IsEq,
            "DEG"      => Cmd::Deg,
            "PRINT"    => Cmd::Print,
            "POP"      => Cmd::Pop,
            _          => return Self::parse_with_arg(s)
        };
        Ok(cmd)
    }
}

// whitespace in the sense of C's isspace.
fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

// a decimal integer with no sign, or with a '-' if `signed`.
fn parse_arg<T: FromStr>(s: &str, signed: bool) -> Option<T> {
    let digits = if signed {
        s.strip_prefix('-').unwrap_or(s)
    } else {
        s
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None
    }

    s.parse().ok()
}
