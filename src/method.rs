use std::{fmt, str::FromStr};

use serde_derive::{Deserialize, Serialize};

use crate::error::Error;
use crate::kind::Real;

/// Selects which magnitude scales the relative tolerance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Scale by the larger magnitude. The most permissive method; symmetric.
    Weak,
    /// Scale by the smaller magnitude. The strictest method; symmetric.
    Strong,
    /// Scale by the mean of both magnitudes; symmetric.
    Average,
    /// Scale by the magnitude of the second operand only, which acts as the reference value.
    /// `a` close to `b` does not imply `b` close to `a`.
    Asymmetric,
}

impl Method {
    /// Every method, in declaration order
    pub const ALL: [Method; 4] = [
        Method::Weak,
        Method::Strong,
        Method::Average,
        Method::Asymmetric,
    ];

    /// Returns the largest difference the relative tolerance admits for operands of magnitude
    /// `a` and `b`
    pub fn threshold<R>(self, rel_tol: R, a: R, b: R) -> R
    where
        R: Real,
    {
        match self {
            Method::Weak => {
                let max = if a >= b { a } else { b };
                rel_tol * max
            }
            Method::Strong => {
                let min = if a <= b { a } else { b };
                rel_tol * min
            }
            Method::Average => (rel_tol * (a + b)).halve(),
            Method::Asymmetric => rel_tol * b,
        }
    }
}

impl Default for Method {
    fn default() -> Self {
        Self::Weak
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weak" => Ok(Self::Weak),
            "strong" => Ok(Self::Strong),
            "average" => Ok(Self::Average),
            "asymmetric" => Ok(Self::Asymmetric),
            invalid => Err(Error::UnknownMethod(invalid.to_owned())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Weak => "weak",
            Self::Strong => "strong",
            Self::Average => "average",
            Self::Asymmetric => "asymmetric",
        })
    }
}
