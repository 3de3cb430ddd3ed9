use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg};
use auto_impl_ops::auto_ops;
use itertools::{EitherOrBoth, Itertools};
use num_traits::Zero;

use crate::Coeff;
use super::{Mono, Poly};

impl Poly {
    fn add_const(&self, c: Coeff) -> Poly {
        if c.is_zero() {
            self.clone()
        } else {
            let m = Mono::new(Poly::from_const(c), 0);
            Self::merge(self.monos(), &[m])
        }
    }

    // linear merge of two exponent-sorted sequences.
    fn merge(ms: &[Mono], ns: &[Mono]) -> Poly {
        let monos = ms.iter()
            .merge_join_by(ns.iter(), |m, n| n.exp().cmp(&m.exp()))
            .filter_map(|e| match e {
                EitherOrBoth::Both(m, n) => {
                    let p = m.coeff() + n.coeff();
                    (!p.is_zero()).then(|| Mono::new(p, m.exp()))
                },
                EitherOrBoth::Left(m) |
                EitherOrBoth::Right(m) => Some(m.clone())
            })
            .collect();

        Poly::from_sorted(monos)
    }
}

impl Neg for Poly {
    type Output = Self;
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Neg for &Poly {
    type Output = Poly;
    fn neg(self) -> Self::Output {
        self.scale(-1)
    }
}

#[auto_ops]
impl<'a, 'b> Add<&'b Poly> for &'a Poly {
    type Output = Poly;

    fn add(self, rhs: &'b Poly) -> Self::Output {
        match (self.as_const(), rhs.as_const()) {
            (Some(a), Some(b)) => Poly::from_const(a.wrapping_add(b)),
            (Some(a), None)    => rhs.add_const(a),
            (None, Some(b))    => self.add_const(b),
            (None, None)       => Poly::merge(self.monos(), rhs.monos())
        }
    }
}

#[auto_ops]
impl<'a, 'b> Sub<&'b Poly> for &'a Poly {
    type Output = Poly;

    fn sub(self, rhs: &'b Poly) -> Self::Output {
        self + &(-rhs)
    }
}

#[auto_ops]
impl<'a, 'b> Mul<&'b Poly> for &'a Poly {
    type Output = Poly;

    fn mul(self, rhs: &'b Poly) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Poly::zero()
        }

        match (self.as_const(), rhs.as_const()) {
            (Some(a), _) => rhs.scale(a),
            (_, Some(b)) => self.scale(b),
            _ => {
                let monos = self.monos().iter()
                    .cartesian_product(rhs.monos())
                    .map(|(m, n)| Mono::new(
                        m.coeff() * n.coeff(),
                        m.exp().wrapping_add(n.exp())
                    ))
                    .collect();
                Poly::from_monos(monos)
            }
        }
    }
}
