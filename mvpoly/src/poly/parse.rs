use std::str::FromStr;
use derive_more::Display;

use crate::{Coeff, Exp, MAX_EXP};
use super::{Mono, Poly};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
#[display("invalid polynomial at byte {pos}")]
pub struct PolyParseError {
    pos: usize
}

impl PolyParseError {
    pub fn pos(&self) -> usize {
        self.pos
    }
}

impl std::error::Error for PolyParseError {}

// Grammar (no whitespace):
//
//   poly  := coeff | mono ('+' mono)*
//   mono  := '(' poly ',' exp ')'
//   coeff := '-'? [0-9]+
//   exp   := [0-9]+

impl FromStr for Poly {
    type Err = PolyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser { src: s, pos: 0 };
        let p = parser.poly()?;
        if parser.pos < s.len() {
            return parser.err()
        }
        Ok(p)
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn err<T>(&self) -> Result<T, PolyParseError> {
        Err(PolyParseError { pos: self.pos })
    }

    fn expect(&mut self, b: u8) -> Result<(), PolyParseError> {
        if self.peek() == Some(b) {
            self.pos += 1;
            Ok(())
        } else {
            self.err()
        }
    }

    fn poly(&mut self) -> Result<Poly, PolyParseError> {
        if self.peek() != Some(b'(') {
            return self.coeff().map(Poly::from_const)
        }

        let mut monos = vec![self.mono()?];
        while self.peek() == Some(b'+') {
            self.pos += 1;
            monos.push(self.mono()?);
        }

        Ok(Poly::from_monos(monos))
    }

    fn mono(&mut self) -> Result<Mono, PolyParseError> {
        self.expect(b'(')?;
        let p = self.poly()?;
        self.expect(b',')?;
        let e = self.exp()?;
        self.expect(b')')?;
        Ok(Mono::new(p, e))
    }

    fn coeff(&mut self) -> Result<Coeff, PolyParseError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        self.digits()?;

        match self.src[start..self.pos].parse() {
            Ok(c) => Ok(c),
            Err(_) => Err(PolyParseError { pos: start })
        }
    }

    fn exp(&mut self) -> Result<Exp, PolyParseError> {
        let start = self.pos;
        self.digits()?;

        match self.src[start..self.pos].parse::<Exp>() {
            Ok(e) if e <= MAX_EXP => Ok(e),
            _ => Err(PolyParseError { pos: start })
        }
    }

    // consumes at least one ascii digit.
    fn digits(&mut self) -> Result<(), PolyParseError> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == start {
            self.err()
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use super::*;

    fn p(s: &str) -> Poly {
        s.parse().unwrap()
    }

    fn fails(s: &str) -> bool {
        s.parse::<Poly>().is_err()
    }

    #[test]
    fn parse_const() {
        assert_eq!(p("0"), Poly::zero());
        assert_eq!(p("-0"), Poly::zero());
        assert_eq!(p("42").as_const(), Some(42));
        assert_eq!(p("-17").as_const(), Some(-17));
        assert_eq!(p("007").as_const(), Some(7));
    }

    #[test]
    #[cfg(not(feature = "i128"))]
    fn parse_const_bounds() {
        assert_eq!(p("9223372036854775807").as_const(), Some(i64::MAX));
        assert_eq!(p("-9223372036854775808").as_const(), Some(i64::MIN));
        assert!(fails("9223372036854775808"));
        assert!(fails("-9223372036854775809"));
    }

    #[test]
    fn parse_mono() {
        let a = p("(1,2)+(3,0)");
        assert_eq!(a.monos().len(), 2);
        assert_eq!(a.to_string(), "(1,2)+(3,0)");
    }

    #[test]
    fn parse_nested() {
        let a = p("((1,1)+(-2,0),3)+(4,1)");
        assert_eq!(a.to_string(), "((1,1)+(-2,0),3)+(4,1)");
        assert_eq!(a.monos()[0].coeff().to_string(), "(1,1)+(-2,0)");
    }

    #[test]
    fn parse_normalizes() {
        assert_eq!(p("(3,0)+(1,2)").to_string(), "(1,2)+(3,0)");
        assert_eq!(p("(1,2)+(1,2)").to_string(), "(2,2)");
        assert_eq!(p("(1,2)+(-1,2)"), Poly::zero());
        assert_eq!(p("(0,5)"), Poly::zero());
        assert!(p("(5,0)").is_const());
        assert!(p("((5,0),0)").is_const());
        assert_eq!(p("((5,0),0)").to_string(), "5");
    }

    #[test]
    fn parse_exp_bounds() {
        assert_eq!(p("(1,2147483647)").deg(), 2147483647);
        assert!(fails("(1,2147483648)"));
        assert!(fails("(1,99999999999)"));
    }

    #[test]
    fn parse_errors() {
        for s in [
            "", "-", "+1", "--1", "1 ", " 1", "1a", "1,2",
            "()", "(1)", "(1,)", "(,1)", "(1,2", "1,2)",
            "(1,-1)", "(1,+1)", "(1,2)+", "+(1,2)", "(1,2)++(1,3)",
            "(1,2)(1,3)", "(1,2)+3", "( 1,2)", "(1, 2)", "(1,2) + (1,3)",
            "((1,2),3", "(1,2))", "(1,2),", "(1.5,2)", "x",
        ] {
            assert!(fails(s), "{s:?} should be rejected");
        }
    }

    #[test]
    fn error_pos() {
        let e = "(1,2)+(3,x)".parse::<Poly>().unwrap_err();
        assert_eq!(e.pos(), 9);

        let e = "12 ".parse::<Poly>().unwrap_err();
        assert_eq!(e.pos(), 2);
    }

    #[test]
    fn round_trip() {
        for s in [
            "0", "-5", "(1,1)", "(1,2)+(3,0)", "((1,1)+(-2,0),3)+(4,1)",
            "(((2,1),1)+(1,0),1)+(4,0)", "((1,1),0)", "(2,3)+(3,0)+(1,2)",
        ] {
            let a = p(s);
            let t = a.to_string();
            assert_eq!(p(&t).to_string(), t);
            assert_eq!(p(&t), a);
        }
    }
}
