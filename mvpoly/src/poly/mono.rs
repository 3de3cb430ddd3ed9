use std::fmt::{Display, Debug};
use crate::Exp;
use super::Poly;

/// A term `c · xᵢᵉ` of a polynomial in `xᵢ`, 
/// where `c` is itself a polynomial in `xᵢ₊₁, xᵢ₊₂, ...`.
#[derive(Clone, PartialEq, Eq)]
pub struct Mono { 
    coeff: Poly,
    exp: Exp
}

impl Mono { 
    pub fn new(coeff: Poly, exp: Exp) -> Self { 
        Self { coeff, exp }
    }

    pub fn exp(&self) -> Exp { 
        self.exp
    }

    pub fn coeff(&self) -> &Poly { 
        &self.coeff
    }

    pub fn into_parts(self) -> (Poly, Exp) { 
        (self.coeff, self.exp)
    }
}

impl From<(Poly, Exp)> for Mono {
    fn from(pair: (Poly, Exp)) -> Self {
        Self::new(pair.0, pair.1)
    }
}

impl Display for Mono {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.coeff, self.exp)
    }
}

impl Debug for Mono {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
