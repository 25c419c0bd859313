//! Primitive integers
//!
//! The difference is taken exactly, without overflow, in the unsigned counterpart of the type.
//! Only then is it widened to `f64`, where the fractional tolerances live.

use crate::kind::Closeness;

macro_rules! signed {
    ($($ty:ident),+) => {
        $(
            impl Closeness for $ty {
                type Real = f64;

                fn distance(&self, other: &$ty) -> f64 {
                    cast::f64(self.abs_diff(*other))
                }

                fn magnitude(&self) -> f64 {
                    cast::f64(self.unsigned_abs())
                }
            }
        )+
    }
}

macro_rules! unsigned {
    ($($ty:ident),+) => {
        $(
            impl Closeness for $ty {
                type Real = f64;

                fn distance(&self, other: &$ty) -> f64 {
                    cast::f64(self.abs_diff(*other))
                }

                fn magnitude(&self) -> f64 {
                    cast::f64(*self)
                }
            }
        )+
    }
}

signed!(i8, i16, i32, i64, isize);
unsigned!(u8, u16, u32, u64, usize);

#[cfg(test)]
macro_rules! test {
    ($ty:ident) => {
        mod $ty {
            use quickcheck::quickcheck;

            use crate::{is_close, Method};

            quickcheck! {
                fn reflexive(x: $ty) -> bool {
                    Method::ALL
                        .iter()
                        .all(|&m| is_close(&x, &x, 0., 0., m) == Ok(true))
                }
            }

            // The exact difference is always within an absolute tolerance of itself, even at
            // the extremes of the type
            quickcheck! {
                fn within_own_difference(a: $ty, b: $ty) -> bool {
                    let diff = a.abs_diff(b);

                    Method::ALL
                        .iter()
                        .all(|&m| is_close(&a, &b, 0., cast::f64(diff), m) == Ok(true))
                }
            }

            #[test]
            fn extremes() {
                assert_eq!(is_close(&$ty::MIN, &$ty::MAX, 0., 0., Method::Weak), Ok(false));
                assert_eq!(is_close(&$ty::MAX, &$ty::MAX, 0., 0., Method::Strong), Ok(true));
            }
        }
    };
}

#[cfg(test)]
mod test {
    test!(i8);
    test!(i64);
    test!(u8);
    test!(u64);

    use crate::{is_close, Method};

    #[test]
    fn relative_boundary() {
        for &m in Method::ALL.iter() {
            for &(a, b) in &[(100_000_001_i64, 100_000_000), (123_456_789, 123_456_788)] {
                assert_eq!(is_close(&a, &b, 1e-8, 0., m), Ok(true), "{} {} {}", a, b, m);
                assert_eq!(is_close(&a, &b, 1e-9, 0., m), Ok(false), "{} {} {}", a, b, m);
            }
        }
    }

    #[test]
    fn negative_operands() {
        assert_eq!(is_close(&-9_i32, &-10, 0.1, 0., Method::Asymmetric), Ok(true));
        assert_eq!(is_close(&-10_i32, &-9, 0.1, 0., Method::Asymmetric), Ok(false));
        assert_eq!(is_close(&-1_i32, &1, 0., 2., Method::Strong), Ok(true));
    }
}
