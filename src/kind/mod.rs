//! Numeric kinds that can be compared
//!
//! Each kind computes differences and magnitudes with its own arithmetic: decimals and rationals
//! stay exact, complex numbers are measured by their modulus and integers subtract without
//! overflow before being scaled by a fractional tolerance.

mod float;
mod int;

#[cfg(feature = "complex")]
mod complex;
#[cfg(feature = "decimal")]
mod decimal;
#[cfg(feature = "rational")]
mod rational;

use std::fmt::Debug;
use std::ops::{Add, Mul};

use num_traits::Zero;

/// A real number type in which tolerances, differences and magnitudes are expressed
pub trait Real: Clone + Debug + PartialOrd + Zero + Add<Output = Self> + Mul<Output = Self> {
    /// The default relative tolerance, `1e-9`, in this type
    fn default_rel_tol() -> Self;

    /// Divides by two, exactly wherever the type allows it
    fn halve(self) -> Self;
}

/// A numeric kind whose values can be tested for approximate equality
///
/// Only the non-finite predicates have default implementations; kinds without NaN or infinite
/// values can rely on them.
pub trait Closeness: PartialEq {
    /// The type the difference and magnitudes of two values are measured in
    type Real: Real;

    /// Returns `abs(self - other)`
    fn distance(&self, other: &Self) -> Self::Real;

    /// Returns `abs(self)`, or the modulus for kinds without an ordering
    fn magnitude(&self) -> Self::Real;

    /// Returns `true` if the value is a "not a number" sentinel
    fn is_nan(&self) -> bool {
        false
    }

    /// Returns `true` if the value is a positive or negative infinity
    fn is_infinite(&self) -> bool {
        false
    }
}
