//! Binary floating point

use crate::kind::{Closeness, Real};

macro_rules! float {
    ($($ty:ident),+) => {
        $(
            impl Real for $ty {
                fn default_rel_tol() -> $ty {
                    1e-9
                }

                fn halve(self) -> $ty {
                    self / 2.
                }
            }

            impl Closeness for $ty {
                type Real = $ty;

                fn distance(&self, other: &$ty) -> $ty {
                    (self - other).abs()
                }

                fn magnitude(&self) -> $ty {
                    self.abs()
                }

                fn is_nan(&self) -> bool {
                    $ty::is_nan(*self)
                }

                fn is_infinite(&self) -> bool {
                    $ty::is_infinite(*self)
                }
            }
        )+
    }
}

float!(f32, f64);

#[cfg(test)]
macro_rules! test {
    ($ty:ident) => {
        mod $ty {
            use approx::relative_eq;
            use quickcheck::quickcheck;
            use quickcheck::TestResult;

            use crate::{is_close, Method};

            // Maps an arbitrary byte onto a tolerance in `[0, 1)`
            fn tol(x: u8) -> $ty {
                $ty::from(x) / 256.
            }

            quickcheck! {
                fn reflexive(x: $ty) -> TestResult {
                    if x.is_nan() {
                        return TestResult::discard();
                    }

                    TestResult::from_bool(
                        Method::ALL
                            .iter()
                            .all(|&m| is_close(&x, &x, 0., 0., m) == Ok(true)),
                    )
                }
            }

            quickcheck! {
                fn nan_is_never_close(x: $ty, rel_tol: u8, abs_tol: u8) -> bool {
                    let (rel_tol, abs_tol) = (tol(rel_tol), $ty::from(abs_tol));

                    Method::ALL.iter().all(|&m| {
                        is_close(&$ty::NAN, &x, rel_tol, abs_tol, m) == Ok(false)
                            && is_close(&x, &$ty::NAN, rel_tol, abs_tol, m) == Ok(false)
                    })
                }
            }

            quickcheck! {
                fn symmetric_methods(a: $ty, b: $ty, rel_tol: u8) -> bool {
                    let rel_tol = tol(rel_tol);

                    [Method::Weak, Method::Strong, Method::Average]
                        .iter()
                        .all(|&m| is_close(&a, &b, rel_tol, 0., m) == is_close(&b, &a, rel_tol, 0., m))
                }
            }

            // Anything `strong` accepts, `weak` accepts too
            quickcheck! {
                fn strong_implies_weak(a: $ty, b: $ty, rel_tol: u8) -> bool {
                    let rel_tol = tol(rel_tol);

                    is_close(&a, &b, rel_tol, 0., Method::Strong) != Ok(true)
                        || is_close(&a, &b, rel_tol, 0., Method::Weak) == Ok(true)
                }
            }

            quickcheck! {
                fn within_abs_tol(a: $ty, b: $ty) -> TestResult {
                    if !a.is_finite() || !b.is_finite() {
                        return TestResult::discard();
                    }

                    let diff = (a - b).abs();

                    TestResult::from_bool(
                        Method::ALL
                            .iter()
                            .all(|&m| is_close(&a, &b, 0., diff, m) == Ok(true)),
                    )
                }
            }

            // Below a relative tolerance of one, `weak` agrees with `approx`'s relative equality
            quickcheck! {
                fn weak_agrees_with_relative_eq(a: $ty, b: $ty, rel_tol: u8, abs_tol: u8) -> TestResult {
                    // NB `approx` still applies the relative check against a lone zero operand
                    if (a == 0.) != (b == 0.) {
                        return TestResult::discard();
                    }

                    let (rel_tol, abs_tol) = (tol(rel_tol), tol(abs_tol));

                    TestResult::from_bool(
                        is_close(&a, &b, rel_tol, abs_tol, Method::Weak)
                            == Ok(relative_eq!(a, b, epsilon = abs_tol, max_relative = rel_tol)),
                    )
                }
            }

            #[test]
            fn signed_zeros() {
                let zero: $ty = 0.;
                for &m in Method::ALL.iter() {
                    assert_eq!(is_close(&zero, &-zero, 0., 0., m), Ok(true));
                }
            }

            #[test]
            fn infinities() {
                let inf = $ty::INFINITY;
                for &m in Method::ALL.iter() {
                    assert_eq!(is_close(&inf, &inf, 0., 0., m), Ok(true));
                    assert_eq!(is_close(&-inf, &-inf, 0., 0., m), Ok(true));
                    assert_eq!(is_close(&inf, &-inf, 1., $ty::MAX, m), Ok(false));
                    assert_eq!(is_close(&$ty::MAX, &inf, 1., $ty::MAX, m), Ok(false));
                }
            }
        }
    };
}
