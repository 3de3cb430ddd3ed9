use num_traits::Zero;
use super::Poly;

impl Poly {
    /// Total degree: the largest sum of exponents along a path
    /// from the root to a constant. `-1` for zero.
    pub fn deg(&self) -> i64 {
        if self.is_zero() {
            -1
        } else {
            self.path_deg()
        }
    }

    fn path_deg(&self) -> i64 {
        self.monos().iter()
            .map(|m| i64::from(m.exp()) + m.coeff().path_deg())
            .max()
            .unwrap_or(0)
    }

    /// Degree in the variable xᵢ. `-1` for zero.
    pub fn deg_by(&self, i: usize) -> i64 {
        if self.is_zero() {
            -1
        } else {
            self.deg_below(i)
        }
    }

    // degree in the variable `k` levels below this one.
    fn deg_below(&self, k: usize) -> i64 {
        match (self.monos(), k) {
            ([], _) => 0,
            ([m, ..], 0) => i64::from(m.exp()),
            (monos, _) => monos.iter()
                .map(|m| m.coeff().deg_below(k - 1))
                .max()
                .unwrap_or(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> Poly {
        s.parse().unwrap()
    }

    #[test]
    fn deg_zero_and_const() {
        assert_eq!(p("0").deg(), -1);
        assert_eq!(p("5").deg(), 0);
        assert_eq!(p("-1").deg(), 0);
    }

    #[test]
    fn deg() {
        assert_eq!(p("(1,1)").deg(), 1);
        assert_eq!(p("(1,2)+(3,0)").deg(), 2);
        assert_eq!(p("((1,2),3)+(1,1)").deg(), 5);
        assert_eq!(p("((1,4),1)+(1,3)").deg(), 5);
        assert_eq!(p("((1,1),0)").deg(), 1);
    }

    #[test]
    fn deg_of_product() {
        let a = p("((1,2),3)+(1,1)");
        let b = p("(((1,1),1),1)+(2,0)");
        assert_eq!((&a * &b).deg(), a.deg() + b.deg());
    }

    #[test]
    fn deg_by_zero_and_const() {
        assert_eq!(p("0").deg_by(0), -1);
        assert_eq!(p("0").deg_by(3), -1);
        assert_eq!(p("5").deg_by(0), 0);
        assert_eq!(p("5").deg_by(2), 0);
    }

    #[test]
    fn deg_by() {
        let a = p("(1,1)");
        assert_eq!(a.deg_by(0), 1);
        assert_eq!(a.deg_by(1), 0);

        let a = p("((1,2),3)+(1,1)");
        assert_eq!(a.deg_by(0), 3);
        assert_eq!(a.deg_by(1), 2);
        assert_eq!(a.deg_by(2), 0);
    }

    #[test]
    fn deg_by_deep() {
        // x₀ + x₁x₂⁴ + x₂²
        let a = p("(1,1)+(((1,4),1)+((1,2),0),0)");
        assert_eq!(a.deg_by(0), 1);
        assert_eq!(a.deg_by(1), 1);
        assert_eq!(a.deg_by(2), 4);
        assert_eq!(a.deg_by(3), 0);
        assert_eq!(a.deg_by(usize::MAX), 0);
    }
}
