use std::collections::LinkedList;
use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::ops::{Index, IndexMut};
use std::slice::{Iter, IterMut};
use std::str::FromStr;

use crate::config::ToleranceConfig;
use crate::error::{EuclideanVectorError, Result};

/// A dense vector of `f64` components whose dimension is fixed once built.
///
/// The vector owns its buffer exclusively: cloning deep-copies the
/// components, moving hands the buffer over without reallocating.
#[derive(Debug)]
pub struct EuclideanVector {
    components: Vec<f64>,
}

impl EuclideanVector {
    /// Absolute tolerance used by `==` when comparing components.
    pub const EPSILON: f64 = 1e-7;

    /// A one-dimensional vector holding `0.0`.
    pub fn new() -> Self {
        Self::zeros(1)
    }

    pub fn zeros(dimensions: usize) -> Self {
        Self::from_elem(dimensions, 0.0)
    }

    pub fn from_elem(dimensions: usize, value: f64) -> Self {
        Self::from_vec(vec![value; dimensions])
    }

    pub fn from_vec(components: Vec<f64>) -> Self {
        Self { components }
    }

    pub fn from_slice(components: &[f64]) -> Self {
        Self::from_vec(components.to_vec())
    }

    pub fn dimensions(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.components.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, f64> {
        self.components.iter_mut()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.components
    }

    /// Moves the buffer into a new vector and leaves `self` zero-dimensional.
    ///
    /// No allocation takes place; `self` stays usable as an empty vector.
    pub fn take(&mut self) -> EuclideanVector {
        EuclideanVector {
            components: mem::take(&mut self.components),
        }
    }

    /// Bounds-checked read of the component at `index`.
    pub fn at(&self, index: isize) -> Result<f64> {
        let offset = self.checked_offset(index)?;
        Ok(self.components[offset])
    }

    /// Bounds-checked mutable access to the component at `index`.
    pub fn at_mut(&mut self, index: isize) -> Result<&mut f64> {
        let offset = self.checked_offset(index)?;
        Ok(&mut self.components[offset])
    }

    fn checked_offset(&self, index: isize) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&offset| offset < self.components.len())
            .ok_or(EuclideanVectorError::IndexOutOfRange {
                index,
                dimensions: self.dimensions(),
            })
    }

    pub(crate) fn ensure_same_dimensions(&self, rhs: &EuclideanVector) -> Result<()> {
        if self.dimensions() != rhs.dimensions() {
            log::debug!(
                "Dimension mismatch: lhs has {} dimensions, rhs has {}",
                self.dimensions(),
                rhs.dimensions()
            );
            return Err(EuclideanVectorError::DimensionMismatch {
                lhs: self.dimensions(),
                rhs: rhs.dimensions(),
            });
        }
        Ok(())
    }

    pub fn mapv<F>(&self, f: F) -> EuclideanVector
    where
        F: FnMut(&f64) -> f64,
    {
        EuclideanVector::from_vec(self.components.iter().map(f).collect())
    }

    /// Compares component-wise with the absolute tolerance in `tolerance`.
    ///
    /// A vector is always equal to itself; vectors of different dimension are
    /// never equal.
    pub fn approx_eq(&self, other: &EuclideanVector, tolerance: &ToleranceConfig) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        self.dimensions() == other.dimensions()
            && self
                .components
                .iter()
                .zip(other.components.iter())
                .all(|(&lhs, &rhs)| tolerance.within(lhs, rhs))
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.components.clone()
    }

    pub fn to_list(&self) -> LinkedList<f64> {
        self.components.iter().copied().collect()
    }
}

impl Default for EuclideanVector {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for EuclideanVector {
    fn clone(&self) -> Self {
        Self {
            components: self.components.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        if self.dimensions() == source.dimensions() {
            self.components.copy_from_slice(&source.components);
        } else {
            log::trace!(
                "Reallocating euclidean_vector buffer: {} -> {} dimensions",
                self.dimensions(),
                source.dimensions()
            );
            self.components = source.components.clone();
        }
    }
}

impl From<Vec<f64>> for EuclideanVector {
    fn from(value: Vec<f64>) -> Self {
        EuclideanVector::from_vec(value)
    }
}

impl From<&[f64]> for EuclideanVector {
    fn from(value: &[f64]) -> Self {
        EuclideanVector::from_slice(value)
    }
}

impl<const N: usize> From<[f64; N]> for EuclideanVector {
    fn from(value: [f64; N]) -> Self {
        EuclideanVector::from_vec(value.to_vec())
    }
}

impl From<EuclideanVector> for Vec<f64> {
    fn from(value: EuclideanVector) -> Self {
        value.components
    }
}

impl From<&EuclideanVector> for Vec<f64> {
    fn from(value: &EuclideanVector) -> Self {
        value.to_vec()
    }
}

impl From<&EuclideanVector> for LinkedList<f64> {
    fn from(value: &EuclideanVector) -> Self {
        value.to_list()
    }
}

impl From<EuclideanVector> for LinkedList<f64> {
    fn from(value: EuclideanVector) -> Self {
        value.components.into_iter().collect()
    }
}

impl FromIterator<f64> for EuclideanVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        EuclideanVector::from_vec(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a f64> for EuclideanVector {
    fn from_iter<I: IntoIterator<Item = &'a f64>>(iter: I) -> Self {
        EuclideanVector::from_vec(iter.into_iter().copied().collect())
    }
}

impl<'a> IntoIterator for &'a EuclideanVector {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl Index<usize> for EuclideanVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(
            index < self.components.len(),
            "index {} out of range for {} dimensions",
            index,
            self.components.len()
        );
        &self.components[index]
    }
}

impl IndexMut<usize> for EuclideanVector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(
            index < self.components.len(),
            "index {} out of range for {} dimensions",
            index,
            self.components.len()
        );
        &mut self.components[index]
    }
}

impl fmt::Display for EuclideanVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.components.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.components.len() {
                write!(f, " ")?;
            }
        }
        write!(f, "]")
    }
}

/// Parses the bracketed, space-separated form produced by `Display`.
impl FromStr for EuclideanVector {
    type Err = EuclideanVectorError;

    fn from_str(s: &str) -> Result<Self> {
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| {
                EuclideanVectorError::Parse(format!("expected '[...]', found '{}'", s))
            })?;

        inner
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|e| {
                    EuclideanVectorError::Parse(format!("component '{}': {}", token, e))
                })
            })
            .collect()
    }
}
