use crate::error::{EuclideanVectorError, Result};
use crate::math::vector::EuclideanVector;

/// Euclidean (L2) norm: the square root of `dot(v, v)`.
pub fn euclidean_norm(v: &EuclideanVector) -> Result<f64> {
    if v.is_empty() {
        log::debug!("Requested the norm of a zero-dimensional vector");
        return Err(EuclideanVectorError::NoDimensionsNorm);
    }
    Ok(dot(v, v)?.sqrt())
}

/// `v` scaled to norm 1.
pub fn unit(v: &EuclideanVector) -> Result<EuclideanVector> {
    if v.is_empty() {
        log::debug!("Requested the unit vector of a zero-dimensional vector");
        return Err(EuclideanVectorError::NoDimensionsUnit);
    }
    let norm = euclidean_norm(v)?;
    if norm == 0.0 {
        log::debug!(
            "Requested the unit vector of a {}-dimensional zero vector",
            v.dimensions()
        );
        return Err(EuclideanVectorError::ZeroNormUnit);
    }
    v / norm
}

pub fn dot(x: &EuclideanVector, y: &EuclideanVector) -> Result<f64> {
    x.ensure_same_dimensions(y)?;
    Ok(dot_scalar_f64(x.as_slice(), y.as_slice()))
}

fn dot_scalar_f64(lhs: &[f64], rhs: &[f64]) -> f64 {
    lhs.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum()
}

impl EuclideanVector {
    pub fn dot(&self, other: &EuclideanVector) -> Result<f64> {
        dot(self, other)
    }

    pub fn norm(&self) -> Result<f64> {
        euclidean_norm(self)
    }

    pub fn unit(&self) -> Result<EuclideanVector> {
        unit(self)
    }
}
