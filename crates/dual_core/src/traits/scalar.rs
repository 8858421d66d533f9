//! The [`Scalar`] trait for writing AD-generic numeric code.
//!
//! Functions written as `fn f<S: Scalar>(x: S) -> Result<S, DualError>` work
//! unchanged with plain `f64`, `Dual<f64>`, and arbitrarily nested
//! `Dual<Dual<..>>` payloads. No method may assume its receiver is a terminal
//! scalar; predicates such as [`Scalar::is_integer`] are defined recursively.

use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::math::elementary::Elementary;
use crate::types::DualError;

/// Numeric payload of a dual number.
///
/// `Zero` and `One` come from `num-traits`; `Zero::is_zero` means every
/// component is exactly zero, never "numerically close to zero".
pub trait Scalar:
    Copy
    + Debug
    + Display
    + PartialEq
    + Zero
    + One
    + Neg<Output = Self>
    + Sub<Output = Self>
    + Add<f64, Output = Self>
    + Sub<f64, Output = Self>
    + Mul<f64, Output = Self>
{
    /// Lift a plain float (zero derivative at every level).
    fn from_f64(value: f64) -> Self;

    /// Innermost real value.
    fn primal(&self) -> f64;

    /// Constant whole number: integral primal, every derivative component zero.
    fn is_integer(&self) -> bool;

    /// Checked division; fails instead of producing infinity or NaN.
    fn try_div(self, rhs: Self) -> Result<Self, DualError>;

    /// Checked exponentiation following the negative-base policy.
    fn try_pow(self, exponent: Self) -> Result<Self, DualError>;

    /// Raise to a constant power.
    #[inline]
    fn try_powf(self, exponent: f64) -> Result<Self, DualError> {
        self.try_pow(Self::from_f64(exponent))
    }

    /// Checked reciprocal.
    #[inline]
    fn try_recip(self) -> Result<Self, DualError> {
        Self::one().try_div(self)
    }

    /// Sine.
    fn sin(self) -> Self;
    /// Cosine.
    fn cos(self) -> Self;
    /// Natural exponential.
    fn exp(self) -> Self;

    /// Natural logarithm; fails unless the primal is positive.
    fn try_ln(self) -> Result<Self, DualError>;

    /// Evaluate a registered elementary function with chain-rule propagation.
    fn apply<E: Elementary>(self) -> Result<Self, DualError>;
}

impl Scalar for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn primal(&self) -> f64 {
        *self
    }

    #[inline]
    fn is_integer(&self) -> bool {
        self.is_finite() && self.fract() == 0.0
    }

    #[inline]
    fn try_div(self, rhs: Self) -> Result<Self, DualError> {
        if rhs == 0.0 {
            return Err(DualError::division_by_zero(self, rhs));
        }
        Ok(self / rhs)
    }

    fn try_pow(self, exponent: Self) -> Result<Self, DualError> {
        let integral = Scalar::is_integer(&exponent);
        if self < 0.0 && !integral {
            return Err(DualError::negative_base(self, exponent));
        }
        if self == 0.0 && exponent < 0.0 {
            return Err(DualError::division_by_zero(1.0, format!("{}^{}", self, -exponent)));
        }
        // powi is exact for small integral exponents
        if integral && exponent.abs() <= i32::MAX as f64 {
            Ok(self.powi(exponent as i32))
        } else {
            Ok(self.powf(exponent))
        }
    }

    #[inline]
    fn sin(self) -> Self {
        f64::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        f64::cos(self)
    }

    #[inline]
    fn exp(self) -> Self {
        f64::exp(self)
    }

    #[inline]
    fn try_ln(self) -> Result<Self, DualError> {
        if self <= 0.0 {
            return Err(DualError::Domain {
                function: "ln",
                argument: self,
            });
        }
        Ok(f64::ln(self))
    }

    #[inline]
    fn apply<E: Elementary>(self) -> Result<Self, DualError> {
        E::value(self)
    }
}
