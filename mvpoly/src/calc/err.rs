use derive_more::Display;
use crate::PolyParseError;

/// Conditions reported for an input line instead of acting on it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum CalcError {
    #[display("STACK UNDERFLOW")]
    StackUnderflow,
    #[display("WRONG COMMAND")]
    WrongCommand,
    #[display("WRONG POLY")]
    WrongPoly,
    #[display("AT WRONG VALUE")]
    AtWrongValue,
    #[display("DEG BY WRONG VARIABLE")]
    DegByWrongVariable,
    #[display("COMPOSE WRONG PARAMETER")]
    ComposeWrongParameter,
}

impl std::error::Error for CalcError {}

impl From<PolyParseError> for CalcError {
    fn from(_: PolyParseError) -> Self {
        CalcError::WrongPoly
    }
}
