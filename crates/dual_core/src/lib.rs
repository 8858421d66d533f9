//! # dual_core: Forward-Mode Automatic Differentiation
//!
//! dual_core computes exact derivatives of scalar functions of one variable by
//! evaluating them on dual numbers `a + bε` with `ε² = 0`:
//! - Dual number type and operator algebra (`types::dual`)
//! - Generic numeric payload and differentiable-function traits (`traits`)
//! - Differentiation operator (`math::differentiate`)
//! - Elementary function registry (`math::elementary`)
//! - Error types: `DualError` (`types::error`)
//!
//! ## Loud Failure
//!
//! Division by a true zero, exponentiation outside the real domain and `ln`
//! of a non-positive argument return `Err(DualError)` at the point of
//! detection instead of producing NaN or infinity. Ordinary `f64` overflow
//! (for example `exp` of a large argument) and NaN inputs still propagate
//! as IEEE values.
//!
//! ## Usage Examples
//!
//! ```rust
//! use dual_core::math::{differentiate, exp, sin};
//! use dual_core::traits::{Scalar, UnivariateFn};
//! use dual_core::types::DualError;
//!
//! // f(x) = x³ + sin(x)·exp(x)
//! struct F;
//!
//! impl UnivariateFn for F {
//!     fn eval<S: Scalar>(&self, x: S) -> Result<S, DualError> {
//!         Ok(x.try_powf(3.0)? + sin(x) * exp(x))
//!     }
//! }
//!
//! // f'(0) = 0 + cos(0)·exp(0) + sin(0)·exp(0) = 1
//! assert_eq!(differentiate(F).at(0.0), Ok(1.0));
//!
//! // f''(x) = 6x + 2cos(x)·exp(x), so f''(0) = 2
//! assert_eq!(differentiate(F).differentiate().at(0.0), Ok(2.0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
