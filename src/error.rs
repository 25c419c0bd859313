use std::{error, fmt};

/// Errors raised while validating a comparison configuration
///
/// Every variant is an invalid configuration: they are reported before either operand is looked
/// at. Two numbers being far apart is never an error.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// `rel_tol` was negative or NaN
    NegativeRelativeTolerance(String),
    /// `abs_tol` was negative or NaN
    NegativeAbsoluteTolerance(String),
    /// The method token is not one of `weak`, `strong`, `average` or `asymmetric`
    UnknownMethod(String),
}

impl Error {
    /// Returns `true` if the error comes from the tolerances or the method rather than the
    /// operands. This holds for every variant.
    pub fn is_invalid_configuration(&self) -> bool {
        match self {
            Self::NegativeRelativeTolerance(_)
            | Self::NegativeAbsoluteTolerance(_)
            | Self::UnknownMethod(_) => true,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeRelativeTolerance(tol) => {
                write!(f, "Relative tolerance must be non-negative, got {}", tol)
            }
            Self::NegativeAbsoluteTolerance(tol) => {
                write!(f, "Absolute tolerance must be non-negative, got {}", tol)
            }
            Self::UnknownMethod(token) => write!(
                f,
                "Unknown method {:?}, expected one of: weak, strong, average, asymmetric",
                token
            ),
        }
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn display() {
        assert_eq!(
            Error::NegativeRelativeTolerance("-1e-100".to_owned()).to_string(),
            "Relative tolerance must be non-negative, got -1e-100"
        );
        assert_eq!(
            Error::UnknownMethod("week".to_owned()).to_string(),
            "Unknown method \"week\", expected one of: weak, strong, average, asymmetric"
        );
    }

    #[test]
    fn all_variants_are_configuration_errors() {
        assert!(Error::NegativeRelativeTolerance(String::new()).is_invalid_configuration());
        assert!(Error::NegativeAbsoluteTolerance(String::new()).is_invalid_configuration());
        assert!(Error::UnknownMethod(String::new()).is_invalid_configuration());
    }
}
