//! Core numeric and error types.
//!
//! This module provides:
//! - `dual`: The dual number type and its operator algebra
//! - `error`: Structured error types for division and domain failures
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Dual`], [`Lift`] from `dual`
//! - [`DualError`] from `error`

pub mod dual;
pub mod error;

pub use dual::{Dual, Lift};
pub use error::DualError;
