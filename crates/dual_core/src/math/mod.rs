//! Differentiation operator and elementary function registry.
//!
//! - `differentiate`: Forward-mode derivative of a `UnivariateFn`, nestable for higher orders
//! - `elementary`: Chain-rule wrappers for transcendental functions (sin, cos, exp, ln)

pub mod differentiate;
pub mod elementary;

pub use differentiate::{derivative, derivative_fn, differentiate, Derivative};
pub use elementary::{apply, cos, exp, ln, sin, Cos, Elementary, Exp, Ln, Sin};
