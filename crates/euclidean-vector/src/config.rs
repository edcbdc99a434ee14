use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::math::EuclideanVector;

/// Absolute tolerance used when comparing vector components.
///
/// `PartialEq` on [`EuclideanVector`] always uses the default tolerance; pass a
/// custom config to [`EuclideanVector::approx_eq`] to compare more loosely or
/// more strictly.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ToleranceConfig {
    pub epsilon: f64,
}

impl ToleranceConfig {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// True when `lhs` and `rhs` differ by no more than `epsilon`.
    #[inline]
    pub fn within(&self, lhs: f64, rhs: f64) -> bool {
        (lhs - rhs).abs() <= self.epsilon
    }
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self {
            epsilon: EuclideanVector::EPSILON,
        }
    }
}

impl FromStr for ToleranceConfig {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let epsilon = s
            .trim()
            .parse::<f64>()
            .map_err(|e| format!("Invalid tolerance '{}': {}", s, e))?;
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(format!(
                "Invalid tolerance '{}': must be a finite, non-negative number",
                s
            ));
        }
        Ok(ToleranceConfig::new(epsilon))
    }
}
