cfg_if::cfg_if! {
    if #[cfg(feature = "i128")] {
        pub type Coeff = i128;
    } else {
        pub type Coeff = i64;
    }
}

pub type Exp = u32;

// largest exponent accepted in a literal.
pub const MAX_EXP: Exp = i32::MAX as Exp;
