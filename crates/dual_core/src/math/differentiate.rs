//! Forward-mode differentiation operator.
//!
//! [`differentiate`] turns a [`UnivariateFn`] into its derivative: evaluating
//! the result at `x` seeds the dual number `x + 1ε`, evaluates the function
//! once, and returns the dual part. The operator itself contains no
//! differentiation logic; correctness rests on the dual algebra.
//!
//! Because [`Derivative`] is again a [`UnivariateFn`], nesting yields higher
//! derivatives. The n-th derivative evaluates the function on an n-fold
//! nested `Dual<Dual<..>>`, which is exact as long as every operation on the
//! path has a true derivative rule.
//!
//! The degenerate quotient `(0, b) / (0, d) = (b/d, 0)` is a convention, not
//! a derivative rule. Under nesting its zero dual part becomes the higher
//! derivative, so functions with a removable singularity (such as
//! `sin(x)/x` at 0) return a convention value from the second order on.
//!
//! # Examples
//! ```
//! use dual_core::math::differentiate::differentiate;
//! use dual_core::math::elementary::Sin;
//! use dual_core::traits::UnivariateFn;
//!
//! // d/dx sin(x) = cos(x), d²/dx² sin(x) = −sin(x)
//! let d_sin = differentiate(Sin);
//! assert_eq!(d_sin.at(0.0), Ok(1.0));
//!
//! let d2_sin = d_sin.differentiate();
//! assert_eq!(d2_sin.at(0.0), Ok(0.0));
//! ```

use crate::traits::{Scalar, UnivariateFn};
use crate::types::{Dual, DualError};

/// Derivative of a wrapped function.
#[derive(Debug, Clone, Copy)]
pub struct Derivative<F> {
    inner: F,
}

impl<F: UnivariateFn> Derivative<F> {
    /// Wrap `inner` so that evaluation yields its derivative.
    pub fn new(inner: F) -> Self {
        Self { inner }
    }

    /// Differentiate once more.
    pub fn differentiate(self) -> Derivative<Self> {
        Derivative::new(self)
    }

    /// The function being differentiated.
    pub fn inner(&self) -> &F {
        &self.inner
    }
}

impl<F: UnivariateFn> UnivariateFn for Derivative<F> {
    #[inline]
    fn eval<S: Scalar>(&self, x: S) -> Result<S, DualError> {
        let seed = Dual::variable(x);
        Ok(self.inner.eval(seed)?.eps)
    }
}

/// Returns the derivative of `f` as a new differentiable function.
///
/// Errors raised while evaluating `f` surface unchanged.
pub fn differentiate<F: UnivariateFn>(f: F) -> Derivative<F> {
    Derivative::new(f)
}

/// First derivative of a plain closure at `x`.
///
/// Closures cannot be generic, so this form does not nest; use
/// [`differentiate`] with a [`UnivariateFn`] for higher orders.
///
/// ```
/// use dual_core::math::differentiate::derivative;
///
/// let slope = derivative(|x| Ok(x * x * x), 2.0).unwrap();
/// assert_eq!(slope, 12.0);
/// ```
pub fn derivative<F>(f: F, x: f64) -> Result<f64, DualError>
where
    F: FnOnce(Dual<f64>) -> Result<Dual<f64>, DualError>,
{
    Ok(f(Dual::variable(x))?.eps)
}

/// Derivative of a plain closure as a reusable callable.
///
/// ```
/// use dual_core::math::differentiate::derivative_fn;
/// use dual_core::math::elementary::exp;
///
/// let g = derivative_fn(|x| Ok(exp(x * 2.0)));
/// assert_eq!(g(0.0), Ok(2.0));
/// ```
pub fn derivative_fn<F>(f: F) -> impl Fn(f64) -> Result<f64, DualError>
where
    F: Fn(Dual<f64>) -> Result<Dual<f64>, DualError>,
{
    move |x| derivative(&f, x)
}
