//! Arbitrary precision decimals

use bigdecimal::BigDecimal;

use crate::kind::{Closeness, Real};

impl Real for BigDecimal {
    fn default_rel_tol() -> BigDecimal {
        BigDecimal::new(1.into(), 9)
    }

    fn halve(self) -> BigDecimal {
        self.half()
    }
}

impl Closeness for BigDecimal {
    type Real = BigDecimal;

    fn distance(&self, other: &BigDecimal) -> BigDecimal {
        (self - other).abs()
    }

    fn magnitude(&self) -> BigDecimal {
        self.abs()
    }
}
