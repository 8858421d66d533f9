//! Core traits for AD-generic numeric code.
//!
//! This module defines the abstractions shared by the dual algebra and the
//! differentiation operator:
//! - Generic numeric payload (`Scalar` trait)
//! - Differentiable scalar functions (`UnivariateFn` trait)
//!
//! All traits are designed for static dispatch: nesting `Dual<Dual<f64>>`
//! for higher derivatives relies on monomorphisation of generic methods.

pub mod scalar;
pub mod univariate;

pub use scalar::Scalar;
pub use univariate::UnivariateFn;
