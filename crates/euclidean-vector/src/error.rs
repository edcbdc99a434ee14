use std::error::Error;
use std::fmt;

pub type Result<T> = std::result::Result<T, EuclideanVectorError>;

/// Error raised by the fallible `EuclideanVector` operations.
///
/// The rendered messages are fixed strings; the variant fields only carry the
/// offending values for `Debug` output.
#[derive(Debug, Clone, PartialEq)]
pub enum EuclideanVectorError {
    IndexOutOfRange { index: isize, dimensions: usize },
    DimensionMismatch { lhs: usize, rhs: usize },
    DivisionByZero,
    NoDimensionsNorm,
    NoDimensionsUnit,
    ZeroNormUnit,
    Parse(String),
}

impl fmt::Display for EuclideanVectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EuclideanVectorError::IndexOutOfRange { .. } => {
                write!(f, "Index X is not valid for this euclidean_vector object")
            }
            EuclideanVectorError::DimensionMismatch { .. } => {
                write!(f, "Dimensions of LHS(X) and RHS(Y) do not match")
            }
            EuclideanVectorError::DivisionByZero => write!(f, "Invalid vector division by 0"),
            EuclideanVectorError::NoDimensionsNorm => {
                write!(f, "euclidean_vector with no dimensions does not have a norm")
            }
            EuclideanVectorError::NoDimensionsUnit => {
                write!(f, "euclidean_vector with no dimensions does not have a unit vector")
            }
            EuclideanVectorError::ZeroNormUnit => write!(
                f,
                "euclidean_vector with zero euclidean normal does not have a unit vector"
            ),
            EuclideanVectorError::Parse(detail) => {
                write!(f, "invalid euclidean_vector literal: {}", detail)
            }
        }
    }
}

impl Error for EuclideanVectorError {}
