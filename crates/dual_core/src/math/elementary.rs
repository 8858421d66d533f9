//! Elementary function registry.
//!
//! Transcendental functions cannot be expressed through `+ − × ÷` alone, so
//! each one is registered as a chain-rule wrapper: for an argument `(a, b)`
//! the result is `(h(a), h'(a)·b)`.
//!
//! ## Registered functions
//!
//! | function | real part | dual part |
//! |---|---|---|
//! | [`Sin`] | sin(a) | cos(a)·b |
//! | [`Cos`] | cos(a) | −sin(a)·b |
//! | [`Exp`] | exp(a) | exp(a)·b |
//! | [`Ln`] | ln(a) | b/a |
//!
//! ## Extending the registry
//!
//! Implement [`Elementary`] for a unit struct by supplying the scalar value
//! and scalar derivative, both generic over [`Scalar`] so that the entry also
//! works under nested differentiation:
//!
//! ```
//! use dual_core::math::elementary::{apply, Elementary};
//! use dual_core::traits::Scalar;
//! use dual_core::types::{Dual, DualError};
//!
//! /// Logistic sigmoid 1 / (1 + exp(−x)).
//! struct Sigmoid;
//!
//! impl Elementary for Sigmoid {
//!     const NAME: &'static str = "sigmoid";
//!
//!     fn value<S: Scalar>(x: S) -> Result<S, DualError> {
//!         ((-x).exp() + 1.0_f64).try_recip()
//!     }
//!
//!     fn derivative<S: Scalar>(x: S) -> Result<S, DualError> {
//!         let s = Self::value(x)?;
//!         Ok(s * (-s + 1.0_f64))
//!     }
//! }
//!
//! let y = apply::<Sigmoid, _>(Dual::variable(0.0)).unwrap();
//! assert_eq!(y, Dual::new(0.5, 0.25));
//! ```

use crate::traits::{Scalar, UnivariateFn};
use crate::types::DualError;

/// A registered elementary function with a known scalar derivative.
pub trait Elementary {
    /// Registry name, used in error messages.
    const NAME: &'static str;

    /// Scalar evaluation `h(x)`.
    fn value<S: Scalar>(x: S) -> Result<S, DualError>;

    /// Scalar derivative `h'(x)`.
    fn derivative<S: Scalar>(x: S) -> Result<S, DualError>;
}

/// Sine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sin;

/// Cosine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cos;

/// Natural exponential.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exp;

/// Natural logarithm, defined for positive arguments only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ln;

impl Elementary for Sin {
    const NAME: &'static str = "sin";

    #[inline]
    fn value<S: Scalar>(x: S) -> Result<S, DualError> {
        Ok(x.sin())
    }

    #[inline]
    fn derivative<S: Scalar>(x: S) -> Result<S, DualError> {
        Ok(x.cos())
    }
}

impl Elementary for Cos {
    const NAME: &'static str = "cos";

    #[inline]
    fn value<S: Scalar>(x: S) -> Result<S, DualError> {
        Ok(x.cos())
    }

    #[inline]
    fn derivative<S: Scalar>(x: S) -> Result<S, DualError> {
        Ok(-x.sin())
    }
}

impl Elementary for Exp {
    const NAME: &'static str = "exp";

    #[inline]
    fn value<S: Scalar>(x: S) -> Result<S, DualError> {
        Ok(x.exp())
    }

    #[inline]
    fn derivative<S: Scalar>(x: S) -> Result<S, DualError> {
        Ok(x.exp())
    }
}

impl Elementary for Ln {
    const NAME: &'static str = "ln";

    fn value<S: Scalar>(x: S) -> Result<S, DualError> {
        if x.primal() <= 0.0 {
            return Err(DualError::Domain {
                function: Self::NAME,
                argument: x.primal(),
            });
        }
        x.try_ln()
    }

    #[inline]
    fn derivative<S: Scalar>(x: S) -> Result<S, DualError> {
        x.try_recip()
    }
}

// Registry entries are themselves differentiable functions of one variable.
macro_rules! impl_univariate {
    ($($ty:ty),*) => {
        $(
            impl UnivariateFn for $ty {
                #[inline]
                fn eval<S: Scalar>(&self, x: S) -> Result<S, DualError> {
                    x.apply::<$ty>()
                }
            }
        )*
    };
}

impl_univariate!(Sin, Cos, Exp, Ln);

/// Evaluate any registered function on a plain or dual argument.
#[inline]
pub fn apply<E: Elementary, S: Scalar>(x: S) -> Result<S, DualError> {
    x.apply::<E>()
}

/// Sine of a plain or dual argument.
///
/// ```
/// use dual_core::math::elementary::sin;
/// use dual_core::types::Dual;
///
/// assert_eq!(sin(Dual::variable(0.0)), Dual::new(0.0, 1.0));
/// ```
#[inline]
pub fn sin<S: Scalar>(x: S) -> S {
    x.sin()
}

/// Cosine of a plain or dual argument.
#[inline]
pub fn cos<S: Scalar>(x: S) -> S {
    x.cos()
}

/// Natural exponential of a plain or dual argument.
#[inline]
pub fn exp<S: Scalar>(x: S) -> S {
    x.exp()
}

/// Natural logarithm of a plain or dual argument.
///
/// # Errors
/// Returns [`DualError::Domain`] when the primal value is not positive.
#[inline]
pub fn ln<S: Scalar>(x: S) -> Result<S, DualError> {
    apply::<Ln, S>(x)
}
