//! Complex numbers, measured by their modulus

use num_complex::Complex;
use num_traits::Float;

use crate::kind::{Closeness, Real};

impl<T> Closeness for Complex<T>
where
    T: Float + Real,
{
    type Real = T;

    fn distance(&self, other: &Complex<T>) -> T {
        (self - other).norm()
    }

    fn magnitude(&self) -> T {
        self.norm()
    }

    fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    fn is_infinite(&self) -> bool {
        !Closeness::is_nan(self) && (self.re.is_infinite() || self.im.is_infinite())
    }
}
