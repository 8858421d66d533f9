//! Functions of one scalar variable that can be differentiated.

use crate::traits::Scalar;
use crate::types::DualError;

/// A scalar function of one variable, generic over the numeric payload.
///
/// This is the contract between user code and the differentiation operator:
/// `eval` must perform every operation through [`Scalar`] and never inspect
/// the concrete type of its argument. Implementations then work for plain
/// `f64` evaluation and for any nesting depth of dual numbers.
///
/// # Examples
/// ```
/// use dual_core::traits::{Scalar, UnivariateFn};
/// use dual_core::types::DualError;
///
/// struct Cube;
///
/// impl UnivariateFn for Cube {
///     fn eval<S: Scalar>(&self, x: S) -> Result<S, DualError> {
///         x.try_powf(3.0)
///     }
/// }
///
/// assert_eq!(Cube.at(2.0), Ok(8.0));
/// ```
pub trait UnivariateFn {
    /// Evaluate at `x`.
    fn eval<S: Scalar>(&self, x: S) -> Result<S, DualError>;

    /// Evaluate at a plain point.
    #[inline]
    fn at(&self, x: f64) -> Result<f64, DualError> {
        self.eval(x)
    }
}

impl<F: UnivariateFn + ?Sized> UnivariateFn for &F {
    #[inline]
    fn eval<S: Scalar>(&self, x: S) -> Result<S, DualError> {
        (**self).eval(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Affine {
        slope: f64,
        intercept: f64,
    }

    impl UnivariateFn for Affine {
        fn eval<S: Scalar>(&self, x: S) -> Result<S, DualError> {
            Ok(x * self.slope + self.intercept)
        }
    }

    #[test]
    fn test_at_evaluates_plainly() {
        let f = Affine {
            slope: 2.0,
            intercept: 1.0,
        };
        assert_eq!(f.at(3.0), Ok(7.0));
    }

    #[test]
    fn test_reference_forwards() {
        let f = Affine {
            slope: -1.0,
            intercept: 0.5,
        };
        let r = &f;
        assert_eq!(r.at(0.5), Ok(0.0));
    }
}
