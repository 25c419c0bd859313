//! Exact rationals

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::{BigRational, Ratio};
use num_traits::{One, Signed};

use crate::kind::{Closeness, Real};

macro_rules! ratio {
    ($($ty:ident),+) => {
        $(
            impl Real for Ratio<$ty> {
                fn default_rel_tol() -> Ratio<$ty> {
                    Ratio::new(1, 1_000_000_000)
                }

                fn halve(self) -> Ratio<$ty> {
                    self / 2
                }
            }
        )+
    }
}

ratio!(i32, i64, i128, isize);

impl Real for BigRational {
    fn default_rel_tol() -> BigRational {
        Ratio::new(BigInt::one(), BigInt::from(1_000_000_000))
    }

    fn halve(self) -> BigRational {
        self / BigInt::from(2)
    }
}

impl<T> Closeness for Ratio<T>
where
    T: Clone + Integer + Signed,
    Ratio<T>: Real,
{
    type Real = Ratio<T>;

    fn distance(&self, other: &Ratio<T>) -> Ratio<T> {
        (self - other).abs()
    }

    fn magnitude(&self) -> Ratio<T> {
        self.abs()
    }
}
