mod types;

pub mod poly;
pub mod stack;
pub mod calc;
pub mod util;

pub use types::*;
pub use poly::{Poly, Mono, PolyParseError};
pub use stack::PolyStack;
pub use calc::{Calc, CalcError, Cmd, Output};
