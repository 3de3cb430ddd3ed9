mod mono;
mod poly;
mod ops;
mod subst;
mod deg;
mod parse;

pub use mono::Mono;
pub use poly::Poly;
pub use parse::PolyParseError;
