//! Contains the `is_close!` macro, which gives the comparison optional, named parameters.

/// Decides whether two numbers are approximately equal, with named optional parameters.
///
/// Any subset of `rel_tol`, `abs_tol` and `method` can be given, in any order. The omitted ones
/// take the values of [`Tolerance::default()`](crate::Tolerance): a relative tolerance of `1e-9`,
/// no absolute tolerance and the `weak` method.
///
/// The operands are borrowed, and the result is the `Result<bool, Error>` of
/// [`Tolerance::is_close`](crate::Tolerance::is_close).
///
/// # Examples:
///
/// ```
/// use isclose::{is_close, Method};
///
/// assert_eq!(is_close!(1e8, 1e8 + 1.), Ok(false));
/// assert_eq!(is_close!(1e8, 1e8 + 1., rel_tol = 1e-8), Ok(true));
/// assert_eq!(is_close!(1e-9, 0., abs_tol = 1e-8), Ok(true));
/// assert_eq!(is_close!(10., 9., method = Method::Asymmetric, rel_tol = 0.1), Ok(false));
/// ```
#[macro_export]
macro_rules! is_close {
    ($a:expr, $b:expr $(, $key:ident = $value:expr)* $(,)?) => {
        $crate::Tolerance::default()
            $(.$key($value))*
            .is_close(&$a, &$b)
    };
}

#[cfg(test)]
mod test {
    use crate::{Error, Method};

    #[test]
    fn defaults() {
        assert_eq!(is_close!(1., 1. + 1e-10), Ok(true));
        assert_eq!(is_close!(1., 1. + 1e-8), Ok(false));
    }

    #[test]
    fn named_parameters_in_any_order() {
        assert_eq!(is_close!(9_i32, 10, rel_tol = 0.1, method = Method::Asymmetric), Ok(true));
        assert_eq!(is_close!(10_i32, 9, method = Method::Asymmetric, rel_tol = 0.1), Ok(false));
        assert_eq!(is_close!(1e-9, 0., abs_tol = 1e-8, rel_tol = 0.,), Ok(true));
    }

    #[test]
    fn invalid_configuration() {
        assert_eq!(
            is_close!(1_i32, 1, rel_tol = -1e-100),
            Err(Error::NegativeRelativeTolerance("-1e-100".to_owned()))
        );
        assert!(is_close!(1_i32, 1, rel_tol = 1e-100, abs_tol = -1e10).is_err());
    }
}
