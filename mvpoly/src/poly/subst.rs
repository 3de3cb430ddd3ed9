use std::borrow::Cow;
use num_traits::{Zero, One, Pow};

use crate::{Coeff, Exp};
use super::Poly;

impl Pow<Exp> for &Poly {
    type Output = Poly;

    fn pow(self, e: Exp) -> Self::Output {
        if let Some(c) = self.to_scalar() {
            return Poly::from_const(c.wrapping_pow(e))
        }

        let mut res = Poly::one();
        let mut base = Cow::Borrowed(self);
        let mut e = e;

        while e > 0 {
            if e & 1 == 1 {
                res = &res * base.as_ref();
            }
            e >>= 1;
            if e > 0 {
                base = Cow::Owned(base.as_ref() * base.as_ref());
            }
        }

        res
    }
}

impl Poly {
    /// Substitutes `subs[i]` for the variable xᵢ.
    ///
    /// Variables with no substitution evaluate to zero, except that
    /// a term of exponent 0 still contributes its coefficient (0⁰ = 1).
    pub fn compose(&self, subs: &[Poly]) -> Poly {
        self.compose_from(subs, 0)
    }

    fn compose_from(&self, subs: &[Poly], i: usize) -> Poly {
        if let Some(c) = self.to_scalar() {
            return Poly::from_const(c)
        }

        let sub = subs.get(i);

        self.monos().iter().fold(Poly::zero(), |acc, m| {
            let e = m.exp();
            match sub {
                Some(q) => {
                    let rest = m.coeff().compose_from(subs, i + 1);
                    if e == 1 {
                        acc + q * &rest
                    } else {
                        acc + &q.pow(e) * &rest
                    }
                },
                None if e == 0 => {
                    acc + m.coeff().compose_from(subs, i + 1)
                },
                None => acc
            }
        })
    }

    /// Evaluates the outermost variable at `x`.
    /// The result is a polynomial in the remaining variables.
    pub fn at(&self, x: Coeff) -> Poly {
        if self.is_const() {
            return self.clone()
        }

        let monos = self.monos().iter().flat_map(|m| {
            let a = x.wrapping_pow(m.exp());
            m.coeff().scale(a).into_monos()
        }).collect();

        Poly::from_monos(monos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Poly {
        s.parse().unwrap()
    }

    #[test]
    fn pow_zero() {
        assert_eq!(p("(1,1)+(2,0)").pow(0), Poly::one());
        assert_eq!(p("0").pow(0), Poly::one());
        assert_eq!(p("0").pow(3), Poly::zero());
    }

    #[test]
    fn pow_scalar() {
        assert_eq!(p("2").pow(10), p("1024"));
        assert_eq!(p("-3").pow(3), p("-27"));
    }

    #[test]
    fn pow() {
        // (x + 1)³
        let a = p("(1,1)+(1,0)");
        assert_eq!(a.pow(1), a);
        assert_eq!(a.pow(3).to_string(), "(1,3)+(3,2)+(3,1)+(1,0)");
    }

    #[test]
    fn pow_nested() {
        // (x₀x₁)² = x₀²x₁²
        let a = p("((1,1),1)");
        assert_eq!(a.pow(2).to_string(), "((1,2),2)");
    }

    #[test]
    fn pow_adds_exps() {
        let ps = ["3", "(1,1)+(-1,0)", "((1,1),1)+(2,0)", "((1,1)+(1,0),2)"];
        for s in ps {
            let a = p(s);
            for (e1, e2) in [(0, 0), (0, 2), (1, 1), (2, 3), (4, 1)] {
                assert_eq!(a.pow(e1 + e2), &a.pow(e1) * &a.pow(e2), "{s}: {e1} + {e2}");
            }
        }
    }

    #[test]
    fn compose_const() {
        assert_eq!(p("5").compose(&[]), p("5"));
        assert_eq!(p("5").compose(&[p("(1,1)")]), p("5"));
    }

    #[test]
    fn compose_empty() {
        // x₀ ↦ 0
        assert!(p("(1,1)").compose(&[]).is_zero());

        // x₀ + 1 ↦ 1
        assert_eq!(p("(1,1)+(1,0)").compose(&[]), p("1"));

        // x₁ ↦ 0
        assert!(p("((1,1),0)").compose(&[]).is_zero());

        // x₁ + 2 ↦ 2
        assert_eq!(p("((1,1)+(2,0),0)").compose(&[]), p("2"));
    }

    #[test]
    fn compose_single() {
        // x² ∘ (x + 1)
        let a = p("(1,2)");
        let q = p("(1,1)+(1,0)");
        assert_eq!(a.compose(&[q]).to_string(), "(1,2)+(2,1)+(1,0)");
    }

    #[test]
    fn compose_identity() {
        let a = p("(2,3)+(-1,1)+(5,0)");
        assert_eq!(a.compose(&[p("(1,1)")]), a);
    }

    #[test]
    fn compose_multi() {
        // x₀x₁ ∘ (3, x₀²) = 3x₀²
        let a = p("((1,1),1)");
        let res = a.compose(&[p("3"), p("(1,2)")]);
        assert_eq!(res.to_string(), "(3,2)");
    }

    #[test]
    fn compose_partial() {
        // x₀ + x₁ ∘ (x₀ + 1) = x₀ + 1, x₁ ↦ 0
        let a = p("(1,1)+((1,1),0)");
        let res = a.compose(&[p("(1,1)+(1,0)")]);
        assert_eq!(res.to_string(), "(1,1)+(1,0)");
    }

    #[test]
    fn compose_to_zero_sub() {
        // x³ + 2 ∘ 0 = 2
        let a = p("(1,3)+(2,0)");
        assert_eq!(a.compose(&[p("0")]), p("2"));
    }

    #[test]
    fn at_const() {
        assert_eq!(p("7").at(3), p("7"));
        assert_eq!(p("0").at(3), p("0"));
    }

    #[test]
    fn at_univar() {
        // x² + 2x + 3 at 2
        let a = p("(1,2)+(2,1)+(3,0)");
        assert_eq!(a.at(2), p("11"));
        assert!(a.at(2).is_const());
        assert_eq!(a.at(0), p("3"));
    }

    #[test]
    fn at_multivar() {
        // x₀x₁ at 3 = 3x₀
        let a = p("((1,1),1)");
        assert_eq!(a.at(3).to_string(), "(3,1)");

        // x₀²x₁ + 2x₁ at 2 = 6x₀
        let a = p("((1,1),2)+((2,1),0)");
        assert_eq!(a.at(2).to_string(), "(6,1)");
    }

    #[test]
    fn at_mixed() {
        // x₀x₁ + x₀ + 5 at -1 = -x₀ + 4
        let a = p("((1,1)+(1,0),1)+(5,0)");
        assert_eq!(a.at(-1).to_string(), "(-1,1)+(4,0)");
    }

    #[test]
    fn at_cancels() {
        // x₀ - 2 at 2
        let a = p("(1,1)+(-2,0)");
        assert!(a.at(2).is_zero());
    }
}
