//! Approximate equality of numbers.
//!
//! Decides whether two values are close to each other under a relative tolerance, an absolute
//! tolerance, or both, for binary floats, integers and (behind the default features) complex
//! numbers, arbitrary precision decimals and rationals.
//!
//! ```
//! use isclose::{is_close, Method};
//!
//! assert_eq!(is_close(&1e8, &(1e8 + 1.), 1e-8, 0., Method::Weak), Ok(true));
//! assert_eq!(is_close(&1e8, &(1e8 + 1.), 1e-9, 0., Method::Weak), Ok(false));
//!
//! // Against zero, only the absolute tolerance matters
//! assert_eq!(is_close(&1e-9, &0., 1., 0., Method::Weak), Ok(false));
//! assert_eq!(is_close(&1e-9, &0., 0., 1e-8, Method::Weak), Ok(true));
//!
//! // Unknown methods are configuration errors
//! assert!("week".parse::<Method>().is_err());
//! ```
//!
//! The `rel_tol` of a comparison is scaled by a magnitude chosen by its [`Method`]:
//!
//! | method       | close if `abs(a - b)` is at most                              |
//! |--------------|---------------------------------------------------------------|
//! | `weak`       | `rel_tol * max(abs(a), abs(b))`, or `abs_tol`                 |
//! | `strong`     | `rel_tol * min(abs(a), abs(b))`, or `abs_tol`                 |
//! | `average`    | `rel_tol * (abs(a) + abs(b)) / 2`, or `abs_tol`               |
//! | `asymmetric` | `rel_tol * abs(b)`, or `abs_tol`                              |

#![deny(missing_docs)]

#[macro_use]
mod macros;

mod error;
mod kind;
mod method;
mod tolerance;

pub use crate::error::Error;
pub use crate::kind::{Closeness, Real};
pub use crate::method::Method;
pub use crate::tolerance::Tolerance;

/// Decides whether `a` and `b` are approximately equal
///
/// Fails if `rel_tol` or `abs_tol` is negative, before the operands are looked at. See
/// [`Tolerance::is_close`] for the exact rules, and the [`is_close!`] macro for a version with
/// default tolerances.
pub fn is_close<T>(
    a: &T,
    b: &T,
    rel_tol: T::Real,
    abs_tol: T::Real,
    method: Method,
) -> Result<bool, Error>
where
    T: Closeness,
{
    Tolerance::new()
        .rel_tol(rel_tol)
        .abs_tol(abs_tol)
        .method(method)
        .is_close(a, b)
}
