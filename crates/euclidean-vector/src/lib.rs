//! euclidean-vector: a dense, dynamically-sized vector of `f64` components.
//!
//! The crate provides a single value type, [`EuclideanVector`], together with
//! its arithmetic operators, the `euclidean_norm`/`unit`/`dot` utilities and
//! conversions into standard sequence containers.
//!
//! Operations that can fail (dimension mismatch, division by zero, degenerate
//! norms, checked indexing) return [`EuclideanVectorError`] and never leave the
//! receiver half-modified.
pub mod config;
pub mod error;
pub mod math;

pub use config::ToleranceConfig;
pub use error::{EuclideanVectorError, Result};
pub use math::{dot, euclidean_norm, unit, EuclideanVector};
