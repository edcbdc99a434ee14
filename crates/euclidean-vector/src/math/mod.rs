//! The `EuclideanVector` value type and the free functions defined over it.
//!
//! `vector` holds the data model (construction, access, conversion and text
//! rendering), `ops` the operator trait implementations and `utility` the
//! norm, unit and dot product helpers.
pub mod ops;
pub mod utility;
pub mod vector;

pub use utility::{dot, euclidean_norm, unit};
pub use vector::EuclideanVector;
