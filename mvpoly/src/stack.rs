use delegate::delegate;
use crate::Poly;

/// A stack of polynomials. Each slot owns its value.
#[derive(Clone, Default, Debug)]
pub struct PolyStack {
    data: Vec<Poly>
}

impl PolyStack {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    delegate! {
        to self.data {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn push(&mut self, p: Poly);
            pub fn pop(&mut self) -> Option<Poly>;
            pub fn clear(&mut self);
            #[call(last)] pub fn top(&self) -> Option<&Poly>;
        }
    }

    pub fn has_two(&self) -> bool {
        self.len() >= 2
    }

    pub fn second(&self) -> Option<&Poly> {
        self.data.iter().nth_back(1)
    }

    /// Removes the two topmost values, returned as `(second, top)`.
    /// Leaves the stack untouched if it holds fewer than two.
    pub fn pop2(&mut self) -> Option<(Poly, Poly)> {
        if !self.has_two() {
            return None
        }
        let top = self.data.pop()?;
        let second = self.data.pop()?;
        Some((second, top))
    }

    /// Removes the `n` topmost values, returned bottom first.
    /// Leaves the stack untouched if it holds fewer than `n`.
    pub fn pop_n(&mut self, n: usize) -> Option<Vec<Poly>> {
        let k = self.len().checked_sub(n)?;
        Some(self.data.split_off(k))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Poly> {
        self.data.iter()
    }
}
