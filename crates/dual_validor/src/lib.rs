//! # dual_validor
//!
//! Case-driven validation harness for plain callables.
//!
//! A [`Validor`] holds a callable `Fn(&I) -> Result<O, E>` and an ordered
//! list of [`TestCase`]s. Running it evaluates every case, reports progress
//! through a [`Reporter`] and stops at the first mismatch or callable error.
//!
//! ## Modules
//!
//! - [`case`]: [`TestCase`] definition
//! - [`comparison`]: exact and relative equality predicates
//! - [`config`]: TOML/environment configuration and `tracing` setup
//! - [`error`]: [`ValidationError`]
//! - [`reporter`]: [`Reporter`] trait and [`TracingReporter`]
//! - [`validor`]: the runner
//!
//! ## Example
//!
//! ```
//! use dual_validor::comparison::{relative, Tolerance};
//! use dual_validor::{TestCase, Validor};
//! use std::convert::Infallible;
//!
//! #[derive(Debug)]
//! struct Angle {
//!     radians: f64,
//! }
//!
//! let report = Validor::new("sin", |a: &Angle| Ok::<_, Infallible>(a.radians.sin()))
//!     .add_case(TestCase::new(Angle { radians: 0.0 }, 0.0))
//!     .add_case(TestCase::new(Angle { radians: std::f64::consts::FRAC_PI_2 }, 1.0))
//!     .run_with(relative(Tolerance::default()))
//!     .unwrap();
//! assert_eq!(report.passed, 2);
//! ```

#![warn(missing_docs)]

pub mod case;
pub mod comparison;
pub mod config;
pub mod error;
pub mod reporter;
pub mod validor;

pub use case::TestCase;
pub use error::ValidationError;
pub use reporter::{Reporter, TracingReporter};
pub use validor::{ValidationReport, Validor};
