use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use float_cmp::F64Margin;

use crate::util::EPSILON;

///Wrapper around the [`float_cmp::approx_eq!()`] macro for easy comparison of floats with a certain tolerance.
///Two FPAs are considered equal if they are within [`EPSILON`] of each other.
///
///Ordering falls back to raw float order when not tolerance-equal, so for any pair of
///finite values exactly one of `a < b`, `a == b`, `a > b` holds.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl<T> From<T> for FPA
where
    T: Into<f64>,
{
    fn from(n: T) -> Self {
        FPA(n.into())
    }
}

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(
            f64,
            self.0,
            other.0,
            F64Margin {
                epsilon: EPSILON,
                ulps: 4
            }
        )
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}
