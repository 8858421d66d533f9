//! Equality predicates for comparing actual and expected outputs.
//!
//! - [`exact`]: `PartialEq`, the default used by `Validor::run`
//! - [`relative`]: `approx` relative comparison for floating-point outputs

use approx::RelativeEq;
use serde::Deserialize;

/// Tolerances for [`relative`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// Absolute tolerance, used near zero.
    pub epsilon: f64,
    /// Relative tolerance.
    pub max_relative: f64,
}

impl Default for Tolerance {
    /// Default values:
    /// - `epsilon`: 1e-12
    /// - `max_relative`: 1e-9
    fn default() -> Self {
        Self {
            epsilon: 1e-12,
            max_relative: 1e-9,
        }
    }
}

impl Tolerance {
    /// Create a tolerance with specified values.
    pub fn new(epsilon: f64, max_relative: f64) -> Self {
        Self {
            epsilon,
            max_relative,
        }
    }
}

/// Exact equality.
#[inline]
pub fn exact<O: PartialEq>(actual: &O, expected: &O) -> bool {
    actual == expected
}

/// Relative equality within `tolerance`.
///
/// ```
/// use dual_validor::comparison::{relative, Tolerance};
///
/// let close = relative(Tolerance::default());
/// assert!(close(&(0.1 + 0.2), &0.3));
/// assert!(!close(&1.0, &1.001));
/// ```
pub fn relative<T>(tolerance: Tolerance) -> impl Fn(&T, &T) -> bool
where
    T: RelativeEq<Epsilon = f64>,
{
    move |actual, expected| {
        actual.relative_eq(expected, tolerance.epsilon, tolerance.max_relative)
    }
}
