//! Arithmetic on `EuclideanVector`.
//!
//! `AddAssign` and friends cannot report failure, so the fallible compound
//! operators are the `try_*_assign` methods. The binary `+`, `-` and `/`
//! operators return `Result` as their output and are built on top of them.
use std::ops::{Add, Div, Mul, MulAssign, Neg, Sub};

use num_traits::AsPrimitive;

use crate::config::ToleranceConfig;
use crate::error::{EuclideanVectorError, Result};
use crate::math::vector::EuclideanVector;

impl EuclideanVector {
    /// Unary plus: a value-identical copy in a fresh buffer.
    pub fn pos(&self) -> EuclideanVector {
        self.clone()
    }

    pub fn try_add_assign(&mut self, rhs: &EuclideanVector) -> Result<&mut Self> {
        self.ensure_same_dimensions(rhs)?;
        for (lhs, rhs) in self.iter_mut().zip(rhs.iter()) {
            *lhs += *rhs;
        }
        Ok(self)
    }

    pub fn try_sub_assign(&mut self, rhs: &EuclideanVector) -> Result<&mut Self> {
        self.try_add_assign(&-rhs)
    }

    /// Divides every component by `divisor`.
    ///
    /// Only an exact zero is rejected; other divisors that produce infinities
    /// or NaN are applied as-is.
    pub fn try_div_assign<S: AsPrimitive<f64>>(&mut self, divisor: S) -> Result<&mut Self> {
        let divisor: f64 = divisor.as_();
        if divisor == 0.0 {
            log::debug!(
                "Rejected division by zero of a {}-dimensional vector",
                self.dimensions()
            );
            return Err(EuclideanVectorError::DivisionByZero);
        }
        for value in self.iter_mut() {
            *value /= divisor;
        }
        Ok(self)
    }
}

impl Neg for &EuclideanVector {
    type Output = EuclideanVector;

    fn neg(self) -> Self::Output {
        self.mapv(|v| -v)
    }
}

impl Neg for EuclideanVector {
    type Output = EuclideanVector;

    fn neg(mut self) -> Self::Output {
        for value in self.iter_mut() {
            *value = -*value;
        }
        self
    }
}

impl<'a, 'b> Add<&'b EuclideanVector> for &'a EuclideanVector {
    type Output = Result<EuclideanVector>;

    fn add(self, rhs: &'b EuclideanVector) -> Self::Output {
        let mut result = self.clone();
        result.try_add_assign(rhs)?;
        Ok(result)
    }
}

impl<'b> Add<&'b EuclideanVector> for EuclideanVector {
    type Output = Result<EuclideanVector>;

    fn add(mut self, rhs: &'b EuclideanVector) -> Self::Output {
        self.try_add_assign(rhs)?;
        Ok(self)
    }
}

impl Add<EuclideanVector> for EuclideanVector {
    type Output = Result<EuclideanVector>;

    fn add(self, rhs: EuclideanVector) -> Self::Output {
        self + &rhs
    }
}

impl<'a, 'b> Sub<&'b EuclideanVector> for &'a EuclideanVector {
    type Output = Result<EuclideanVector>;

    fn sub(self, rhs: &'b EuclideanVector) -> Self::Output {
        let mut result = self.clone();
        result.try_sub_assign(rhs)?;
        Ok(result)
    }
}

impl<'b> Sub<&'b EuclideanVector> for EuclideanVector {
    type Output = Result<EuclideanVector>;

    fn sub(mut self, rhs: &'b EuclideanVector) -> Self::Output {
        self.try_sub_assign(rhs)?;
        Ok(self)
    }
}

impl Sub<EuclideanVector> for EuclideanVector {
    type Output = Result<EuclideanVector>;

    fn sub(self, rhs: EuclideanVector) -> Self::Output {
        self - &rhs
    }
}

impl<S: AsPrimitive<f64>> MulAssign<S> for EuclideanVector {
    fn mul_assign(&mut self, factor: S) {
        let factor: f64 = factor.as_();
        for value in self.iter_mut() {
            *value *= factor;
        }
    }
}

impl<'a, S: AsPrimitive<f64>> Mul<S> for &'a EuclideanVector {
    type Output = EuclideanVector;

    fn mul(self, factor: S) -> Self::Output {
        let mut result = self.clone();
        result *= factor;
        result
    }
}

impl<S: AsPrimitive<f64>> Mul<S> for EuclideanVector {
    type Output = EuclideanVector;

    fn mul(mut self, factor: S) -> Self::Output {
        self *= factor;
        self
    }
}

impl<'b> Mul<&'b EuclideanVector> for f64 {
    type Output = EuclideanVector;

    fn mul(self, rhs: &'b EuclideanVector) -> Self::Output {
        rhs * self
    }
}

impl<'a, S: AsPrimitive<f64>> Div<S> for &'a EuclideanVector {
    type Output = Result<EuclideanVector>;

    fn div(self, divisor: S) -> Self::Output {
        let mut result = self.clone();
        result.try_div_assign(divisor)?;
        Ok(result)
    }
}

impl<S: AsPrimitive<f64>> Div<S> for EuclideanVector {
    type Output = Result<EuclideanVector>;

    fn div(mut self, divisor: S) -> Self::Output {
        self.try_div_assign(divisor)?;
        Ok(self)
    }
}

/// Component-wise comparison within `EuclideanVector::EPSILON`.
impl PartialEq for EuclideanVector {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, &ToleranceConfig::default())
    }
}
