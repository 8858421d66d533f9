//! Dual number type for forward-mode automatic differentiation.
//!
//! `Dual { re, eps }` represents the truncated Taylor expansion `re + eps·ε`
//! with `ε² = 0`. The payload `T` is any [`Scalar`], including `Dual` itself,
//! so nesting `Dual<Dual<f64>>` carries second derivatives.
//!
//! ## Coercion
//!
//! Every binary operation lifts its right operand through [`Lift`] first: a
//! plain scalar `v` is identical to `(v, 0)`, and an existing dual number
//! passes through unchanged.
//!
//! ```
//! use dual_core::types::Dual;
//!
//! let x = Dual::variable(3.0_f64); // 3 + 1ε
//! let y = x * x + 2.0;             // x² + 2
//! assert_eq!(y, Dual::new(11.0, 6.0));
//! ```

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::{One, Zero};

use crate::math::elementary::Elementary;
use crate::traits::Scalar;
use crate::types::DualError;

/// Forward-mode dual number: a value paired with its tangent.
#[derive(Clone, Copy, Debug, Default)]
pub struct Dual<T> {
    /// Real part (function value).
    pub re: T,
    /// Dual part (derivative).
    pub eps: T,
}

/// Coercion of an operand into a dual number.
///
/// Implemented for `Dual<T>` (identity), `f64` and `i32` (zero dual part).
pub trait Lift<T> {
    /// Convert into a dual number.
    fn lift(self) -> Dual<T>;
}

impl<T: Scalar> Lift<T> for Dual<T> {
    #[inline]
    fn lift(self) -> Dual<T> {
        self
    }
}

impl<T: Scalar> Lift<T> for f64 {
    #[inline]
    fn lift(self) -> Dual<T> {
        Dual::constant(T::from_f64(self))
    }
}

impl<T: Scalar> Lift<T> for i32 {
    #[inline]
    fn lift(self) -> Dual<T> {
        Dual::constant(T::from_f64(f64::from(self)))
    }
}

impl<T: Scalar> From<T> for Dual<T> {
    #[inline]
    fn from(re: T) -> Self {
        Dual::constant(re)
    }
}

impl<T: Scalar> Dual<T> {
    /// Create a new dual number.
    #[inline]
    pub fn new(re: T, eps: T) -> Self {
        Dual { re, eps }
    }

    /// Create a constant (zero derivative).
    #[inline]
    pub fn constant(re: T) -> Self {
        Dual { re, eps: T::zero() }
    }

    /// Create the seed `re + 1ε` for differentiation.
    #[inline]
    pub fn variable(re: T) -> Self {
        Dual { re, eps: T::one() }
    }

    /// Lift a scalar or pass a dual number through unchanged.
    ///
    /// ```
    /// use dual_core::types::Dual;
    ///
    /// let d = Dual::new(1.0, 2.0);
    /// assert_eq!(Dual::coerce(d), d);
    /// assert_eq!(Dual::<f64>::coerce(4.0), Dual::new(4.0, 0.0));
    /// ```
    #[inline]
    pub fn coerce<R: Lift<T>>(value: R) -> Self {
        value.lift()
    }

    /// Apply the chain rule: given `h(re)` and `h'(re)`, produce the dual result.
    #[inline]
    fn chain(self, value: T, derivative: T) -> Self {
        Dual {
            re: value,
            eps: derivative * self.eps,
        }
    }

    /// Quotient `self / rhs`.
    ///
    /// With `(a, b) / (c, d)`:
    /// - `c ≠ 0`: `(a/c, (b·c − a·d)/c²)`
    /// - `c = 0`, `a = 0`, `d ≠ 0`: `(b/d, 0)`, the removable-singularity limit
    /// - otherwise [`DualError::DivisionByZero`]
    ///
    /// The removable-singularity branch drops the dual part. Nested inside a
    /// higher-order evaluation that zero is returned as the higher
    /// derivative, which is generally not the true limit.
    ///
    /// ```
    /// use dual_core::types::Dual;
    ///
    /// let q = Dual::new(0.0, 5.0).checked_div(Dual::new(0.0, 2.0)).unwrap();
    /// assert_eq!(q, Dual::new(2.5, 0.0));
    /// assert!(Dual::new(1.0, 0.0).checked_div(Dual::new(0.0, 0.0)).is_err());
    /// ```
    pub fn checked_div<R: Lift<T>>(self, rhs: R) -> Result<Self, DualError> {
        let rhs = rhs.lift();
        let (a, b, c, d) = (self.re, self.eps, rhs.re, rhs.eps);

        if !c.is_zero() {
            let re = a.try_div(c)?;
            let eps = (b * c - a * d).try_div(c)?.try_div(c)?;
            Ok(Dual::new(re, eps))
        } else if a.is_zero() && !d.is_zero() {
            Ok(Dual::new(b.try_div(d)?, T::zero()))
        } else {
            Err(DualError::division_by_zero(self, rhs))
        }
    }

    /// Power `self ^ exponent`.
    ///
    /// With base `(a, b)` and exponent `(c, d)`:
    /// - negative `a` requires `d = 0` and integral `c`
    /// - `d = 0`: `(a^c, c·a^(c−1)·b)`
    /// - `d ≠ 0`: `(a^c, a^c·(b·c/a + d·ln a))`, requiring `a > 0`
    ///
    /// ```
    /// use dual_core::types::Dual;
    ///
    /// let cube = Dual::new(-2.0, 0.0).checked_pow(Dual::new(3.0, 0.0)).unwrap();
    /// assert_eq!(cube, Dual::new(-8.0, 0.0));
    /// assert!(Dual::new(-2.0, 0.0).checked_pow(Dual::new(0.5, 0.0)).is_err());
    /// ```
    pub fn checked_pow<R: Lift<T>>(self, exponent: R) -> Result<Self, DualError> {
        let exponent = exponent.lift();
        let (a, b, c, d) = (self.re, self.eps, exponent.re, exponent.eps);
        let dual_exponent = !d.is_zero();
        let base = a.primal();

        if base < 0.0 && (dual_exponent || !c.is_integer()) {
            return Err(DualError::negative_base(self, exponent));
        }

        if !dual_exponent {
            let re = a.try_pow(c)?;
            // x^0 is constant; skips evaluating 0^(-1)
            if c.is_zero() {
                return Ok(Dual::new(re, T::zero()));
            }
            let eps = c * a.try_pow(c - 1.0_f64)? * b;
            return Ok(Dual::new(re, eps));
        }

        if base == 0.0 {
            return Err(DualError::ZeroBaseDualExponent {
                base: self.to_string(),
                exponent: exponent.to_string(),
            });
        }

        let re = a.try_pow(c)?;
        let eps = re * ((b * c).try_div(a)? + d * a.try_ln()?);
        Ok(Dual::new(re, eps))
    }

    /// Reflected quotient `numerator / self`.
    #[inline]
    pub fn rdiv<R: Lift<T>>(self, numerator: R) -> Result<Self, DualError> {
        numerator.lift().checked_div(self)
    }

    /// Reflected power `base ^ self`.
    #[inline]
    pub fn rpow<R: Lift<T>>(self, base: R) -> Result<Self, DualError> {
        base.lift().checked_pow(self)
    }
}

impl<T: fmt::Display> fmt::Display for Dual<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}ε", self.re, self.eps)
    }
}

impl<T: Scalar> PartialEq for Dual<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.re == other.re && self.eps == other.eps
    }
}

impl<T: Scalar> PartialEq<f64> for Dual<T> {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        *self == Dual::<T>::coerce(*other)
    }
}

// (a + bε) + (c + dε) = (a + c) + (b + d)ε
impl<T: Scalar, R: Lift<T>> Add<R> for Dual<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: R) -> Self {
        let rhs = rhs.lift();
        Dual {
            re: self.re + rhs.re,
            eps: self.eps + rhs.eps,
        }
    }
}

impl<T: Scalar, R: Lift<T>> Sub<R> for Dual<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: R) -> Self {
        self + (-rhs.lift())
    }
}

// (a + bε)(c + dε) = ac + (ad + bc)ε
impl<T: Scalar, R: Lift<T>> Mul<R> for Dual<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: R) -> Self {
        let rhs = rhs.lift();
        Dual {
            re: self.re * rhs.re,
            eps: self.re * rhs.eps + self.eps * rhs.re,
        }
    }
}

impl<T: Scalar> Neg for Dual<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Dual {
            re: -self.re,
            eps: -self.eps,
        }
    }
}

impl<T: Scalar> Add<Dual<T>> for f64 {
    type Output = Dual<T>;

    #[inline]
    fn add(self, rhs: Dual<T>) -> Dual<T> {
        rhs + self
    }
}

impl<T: Scalar> Sub<Dual<T>> for f64 {
    type Output = Dual<T>;

    #[inline]
    fn sub(self, rhs: Dual<T>) -> Dual<T> {
        Dual::<T>::coerce(self) + (-rhs)
    }
}

impl<T: Scalar> Mul<Dual<T>> for f64 {
    type Output = Dual<T>;

    #[inline]
    fn mul(self, rhs: Dual<T>) -> Dual<T> {
        rhs * self
    }
}

impl<T: Scalar> Zero for Dual<T> {
    #[inline]
    fn zero() -> Self {
        Dual::constant(T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.eps.is_zero()
    }
}

impl<T: Scalar> One for Dual<T> {
    #[inline]
    fn one() -> Self {
        Dual::constant(T::one())
    }
}

impl<T: Scalar> Scalar for Dual<T> {
    #[inline]
    fn from_f64(value: f64) -> Self {
        Dual::constant(T::from_f64(value))
    }

    #[inline]
    fn primal(&self) -> f64 {
        self.re.primal()
    }

    #[inline]
    fn is_integer(&self) -> bool {
        self.re.is_integer() && self.eps.is_zero()
    }

    #[inline]
    fn try_div(self, rhs: Self) -> Result<Self, DualError> {
        self.checked_div(rhs)
    }

    #[inline]
    fn try_pow(self, exponent: Self) -> Result<Self, DualError> {
        self.checked_pow(exponent)
    }

    #[inline]
    fn sin(self) -> Self {
        self.chain(self.re.sin(), self.re.cos())
    }

    #[inline]
    fn cos(self) -> Self {
        self.chain(self.re.cos(), -self.re.sin())
    }

    #[inline]
    fn exp(self) -> Self {
        let e = self.re.exp();
        self.chain(e, e)
    }

    fn try_ln(self) -> Result<Self, DualError> {
        let value = self.re.try_ln()?;
        Ok(self.chain(value, self.re.try_recip()?))
    }

    fn apply<E: Elementary>(self) -> Result<Self, DualError> {
        let value = E::value(self.re)?;
        Ok(self.chain(value, E::derivative(self.re)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dual_constructors() {
        assert_eq!(Dual::new(3.0, 2.0).eps, 2.0);
        assert_eq!(Dual::constant(3.0), Dual::new(3.0, 0.0));
        assert_eq!(Dual::variable(3.0), Dual::new(3.0, 1.0));
        assert_eq!(Dual::<f64>::default(), Dual::new(0.0, 0.0));
        assert_eq!(Dual::from(4.0), Dual::new(4.0, 0.0));
    }

    #[test]
    fn test_coerce_is_idempotent() {
        let d = Dual::new(1.5, -2.0);
        let once = Dual::coerce(d);
        let twice = Dual::coerce(once);
        assert_eq!(once.re, d.re);
        assert_eq!(once.eps, d.eps);
        assert_eq!(twice, d);
    }

    #[test]
    fn test_coerce_lifts_scalars() {
        assert_eq!(Dual::<f64>::coerce(2.0), Dual::new(2.0, 0.0));
        assert_eq!(Dual::<f64>::coerce(7), Dual::new(7.0, 0.0));
    }

    #[test]
    fn test_addition() {
        let sum = Dual::new(1.0, 2.0) + Dual::new(3.0, 4.0);
        assert_eq!(sum, Dual::new(4.0, 6.0));
        assert_eq!(Dual::new(1.0, 2.0) + 1.0, Dual::new(2.0, 2.0));
        assert_eq!(1.0 + Dual::new(1.0, 2.0), Dual::new(2.0, 2.0));
        assert_eq!(Dual::new(1.0, 2.0) + 3, Dual::new(4.0, 2.0));
    }

    #[test]
    fn test_subtraction() {
        assert_eq!(
            Dual::new(5.0, 3.0) - Dual::new(2.0, 1.0),
            Dual::new(3.0, 2.0)
        );
        assert_eq!(Dual::new(5.0, 3.0) - 1.0, Dual::new(4.0, 3.0));
        assert_eq!(1.0 - Dual::new(5.0, 3.0), Dual::new(-4.0, -3.0));
    }

    #[test]
    fn test_multiplication_product_rule() {
        let prod = Dual::new(2.0, 1.0) * Dual::new(3.0, 4.0);
        // ac = 6, ad + bc = 8 + 3
        assert_eq!(prod, Dual::new(6.0, 11.0));
        assert_eq!(2.0 * Dual::new(3.0, 4.0), Dual::new(6.0, 8.0));
        assert_eq!(Dual::new(3.0, 4.0) * 2.0, Dual::new(6.0, 8.0));
    }

    #[test]
    fn test_negation() {
        assert_eq!(-Dual::new(1.0, -2.0), Dual::new(-1.0, 2.0));
    }

    #[test]
    fn test_operands_are_not_mutated() {
        let a = Dual::new(2.0, 1.0);
        let b = Dual::new(3.0, 0.0);
        let _ = a * b + a - b;
        assert_eq!(a, Dual::new(2.0, 1.0));
        assert_eq!(b, Dual::new(3.0, 0.0));
    }

    #[test]
    fn test_division_regular() {
        let q = Dual::new(2.0, 1.0).checked_div(Dual::new(4.0, 0.0)).unwrap();
        assert_eq!(q, Dual::new(0.5, 0.25));

        // d/dx (1/x) at x = 2 is -1/4
        let r = Dual::variable(2.0).rdiv(1.0).unwrap();
        assert_eq!(r, Dual::new(0.5, -0.25));
    }

    #[test]
    fn test_division_degenerate_case() {
        let q = Dual::new(0.0, 5.0).checked_div(Dual::new(0.0, 2.0)).unwrap();
        assert_eq!(q, Dual::new(2.5, 0.0));
    }

    #[test]
    fn test_division_by_zero_fails() {
        let err = Dual::new(1.0, 0.0)
            .checked_div(Dual::new(0.0, 0.0))
            .unwrap_err();
        assert!(matches!(err, DualError::DivisionByZero { .. }));

        // nonzero real numerator over an infinitesimal has no limit
        assert!(Dual::new(1.0, 1.0).checked_div(Dual::new(0.0, 2.0)).is_err());
        // 0/0 with zero dual part in the divisor has no limit either
        assert!(Dual::new(0.0, 1.0).checked_div(0.0).is_err());
    }

    #[test]
    fn test_power_rule_constant_exponent() {
        let p = Dual::variable(2.0).checked_pow(3.0).unwrap();
        assert_eq!(p, Dual::new(8.0, 12.0));
    }

    #[test]
    fn test_power_negative_base_integer_exponent() {
        let p = Dual::new(-2.0, 0.0).checked_pow(Dual::new(3.0, 0.0)).unwrap();
        assert_eq!(p, Dual::new(-8.0, 0.0));

        let q = Dual::variable(-2.0).checked_pow(2).unwrap();
        assert_eq!(q, Dual::new(4.0, -4.0));
    }

    #[test]
    fn test_power_negative_base_fractional_exponent_fails() {
        let err = Dual::new(-2.0, 0.0)
            .checked_pow(Dual::new(0.5, 0.0))
            .unwrap_err();
        assert!(matches!(err, DualError::NegativeBase { .. }));
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_power_negative_base_dual_exponent_fails() {
        let err = Dual::new(-2.0, 0.0)
            .checked_pow(Dual::new(2.0, 1.0))
            .unwrap_err();
        assert!(matches!(err, DualError::NegativeBase { .. }));
    }

    #[test]
    fn test_power_dual_exponent() {
        // x^x at x = 2: value 4, derivative 4·(1 + ln 2)
        let x = Dual::variable(2.0);
        let p = x.checked_pow(x).unwrap();
        assert_eq!(p.re, 4.0);
        assert_relative_eq!(p.eps, 4.0 * (1.0 + 2.0_f64.ln()), epsilon = 1e-12);
    }

    #[test]
    fn test_power_zero_base_dual_exponent_fails() {
        let err = Dual::new(0.0, 1.0)
            .checked_pow(Dual::new(2.0, 1.0))
            .unwrap_err();
        assert!(matches!(err, DualError::ZeroBaseDualExponent { .. }));
    }

    #[test]
    fn test_power_zero_exponent_at_zero() {
        let p = Dual::variable(0.0).checked_pow(0.0).unwrap();
        assert_eq!(p, Dual::new(1.0, 0.0));
    }

    #[test]
    fn test_reflected_power() {
        // d/dx 2^x at x = 3 is 8·ln 2
        let p = Dual::variable(3.0).rpow(2.0).unwrap();
        assert_eq!(p.re, 8.0);
        assert_relative_eq!(p.eps, 8.0 * 2.0_f64.ln(), epsilon = 1e-12);
    }

    #[test]
    fn test_equality_is_exact() {
        assert_eq!(Dual::new(1.0, 2.0), Dual::new(1.0, 2.0));
        assert_ne!(Dual::new(1.0, 2.0), Dual::new(1.0, 2.0000001));
        assert_ne!(Dual::new(1.0, 2.0), Dual::new(1.0000001, 2.0));
        assert_eq!(Dual::new(3.0, 0.0), 3.0);
        assert_ne!(Dual::new(3.0, 1.0), 3.0);
    }

    #[test]
    fn test_equality_symmetric() {
        let a = Dual::new(1.0, 2.0);
        let b = Dual::new(1.0, 2.0);
        assert_eq!(a == b, b == a);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Dual::new(1.0, 2.5)), "1 + 2.5ε");
        let nested = Dual::new(Dual::new(1.0, 0.0), Dual::new(0.0, 1.0));
        assert_eq!(format!("{}", nested), "1 + 0ε + 0 + 1εε");
    }

    #[test]
    fn test_nested_is_integer() {
        let c = Dual::new(Dual::new(3.0, 0.0), Dual::new(0.0, 0.0));
        assert!(c.is_integer());
        let tangent = Dual::new(Dual::new(3.0, 1.0), Dual::new(0.0, 0.0));
        assert!(!tangent.is_integer());
        assert_eq!(tangent.primal(), 3.0);
    }

    #[test]
    fn test_nested_zero_requires_every_component() {
        let z: Dual<Dual<f64>> = Dual::zero();
        assert!(z.is_zero());
        assert!(!Dual::new(Dual::new(0.0, 0.0), Dual::new(0.0, 1e-300)).is_zero());
    }

    #[test]
    fn test_elementary_methods() {
        let x = Dual::variable(0.0);
        assert_eq!(x.sin(), Dual::new(0.0, 1.0));
        assert_eq!(x.cos(), Dual::new(1.0, -0.0));
        assert_eq!(x.exp(), Dual::new(1.0, 1.0));
        assert_eq!(Dual::variable(1.0).try_ln().unwrap(), Dual::new(0.0, 1.0));
        assert!(Dual::variable(0.0).try_ln().is_err());
    }
}
