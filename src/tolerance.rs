use std::cmp::Ordering;

use log::{debug, trace};
use serde_derive::{Deserialize, Serialize};

use crate::error::Error;
use crate::kind::{Closeness, Real};
use crate::method::Method;

/// The configuration of a comparison
///
/// Tolerances are expressed in the real type `R` of the compared numeric kind: `f64` for `f64`,
/// integers and `Complex<f64>`, `BigDecimal` for decimals and `Ratio<T>` for rationals.
///
/// The setters never fail. The configuration is validated each time it is used, before the
/// operands are inspected.
///
/// ```
/// use isclose::{Method, Tolerance};
///
/// let tolerance = Tolerance::default().rel_tol(0.1).method(Method::Asymmetric);
///
/// assert_eq!(tolerance.is_close(&9., &10.), Ok(true));
/// assert_eq!(tolerance.is_close(&10., &9.), Ok(false));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "R: Real + serde::Deserialize<'de>"))]
pub struct Tolerance<R> {
    rel_tol: R,
    abs_tol: R,
    method: Method,
}

impl<R> Default for Tolerance<R>
where
    R: Real,
{
    /// Creates a configuration with a relative tolerance of `1e-9`, no absolute tolerance and
    /// the `weak` method
    fn default() -> Tolerance<R> {
        Tolerance {
            rel_tol: R::default_rel_tol(),
            abs_tol: R::zero(),
            method: Method::default(),
        }
    }
}

impl<R> Tolerance<R>
where
    R: Real,
{
    /// Same as `Tolerance::default()`
    pub fn new() -> Tolerance<R> {
        Tolerance::default()
    }

    /// Changes the maximum difference allowed, as a fraction of the operands' magnitude
    pub fn rel_tol(mut self, rel_tol: R) -> Tolerance<R> {
        self.rel_tol = rel_tol;
        self
    }

    /// Changes the maximum difference allowed regardless of magnitude. Needed for values that
    /// may be zero.
    pub fn abs_tol(mut self, abs_tol: R) -> Tolerance<R> {
        self.abs_tol = abs_tol;
        self
    }

    /// Changes which magnitude scales the relative tolerance
    pub fn method(mut self, method: Method) -> Tolerance<R> {
        self.method = method;
        self
    }

    /// Checks that both tolerances are non-negative. NaN tolerances are rejected as well.
    pub fn validate(&self) -> Result<(), Error> {
        let zero = R::zero();

        if is_negative(&self.rel_tol, &zero) {
            let err = Error::NegativeRelativeTolerance(format!("{:?}", self.rel_tol));
            debug!("Rejecting comparison: {}", err);
            return Err(err);
        }

        if is_negative(&self.abs_tol, &zero) {
            let err = Error::NegativeAbsoluteTolerance(format!("{:?}", self.abs_tol));
            debug!("Rejecting comparison: {}", err);
            return Err(err);
        }

        Ok(())
    }

    /// Decides whether `a` and `b` are approximately equal
    ///
    /// - Equal values are always close, even with zero tolerances.
    /// - NaN is never close to anything, infinities only to themselves.
    /// - Otherwise the pair is close if `abs(a - b)` is within `abs_tol`, or within `rel_tol`
    ///   scaled by the magnitude `method` selects. The relative check is skipped against a zero
    ///   reference: `b` for `asymmetric`, either operand for the other methods.
    pub fn is_close<T>(&self, a: &T, b: &T) -> Result<bool, Error>
    where
        T: Closeness<Real = R>,
    {
        self.validate()?;

        if a == b {
            return Ok(true);
        }

        if a.is_nan() || b.is_nan() {
            trace!("NaN operand, not close");
            return Ok(false);
        }

        if a.is_infinite() || b.is_infinite() {
            trace!("Unequal infinite operand, not close");
            return Ok(false);
        }

        let diff = a.distance(b);
        if diff <= self.abs_tol {
            return Ok(true);
        }

        let (a, b) = (a.magnitude(), b.magnitude());
        let zero_reference = match self.method {
            Method::Asymmetric => b.is_zero(),
            Method::Weak | Method::Strong | Method::Average => a.is_zero() || b.is_zero(),
        };
        if zero_reference {
            return Ok(false);
        }

        let threshold = self.method.threshold(self.rel_tol.clone(), a, b);
        Ok(diff <= threshold)
    }
}

fn is_negative<R>(tol: &R, zero: &R) -> bool
where
    R: Real,
{
    match tol.partial_cmp(zero) {
        Some(Ordering::Less) | None => true,
        Some(Ordering::Equal) | Some(Ordering::Greater) => false,
    }
}
