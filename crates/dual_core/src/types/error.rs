//! Error types for dual-number arithmetic.
//!
//! Every invalid operation fails at the point of detection instead of
//! producing NaN or infinity, so callers never see a plausible-looking but
//! wrong derivative.

use thiserror::Error;

/// Categorised arithmetic errors.
///
/// # Variants
/// - `DivisionByZero`: divisor is a true zero with no limiting interpretation
/// - `NegativeBase`: negative base raised to a fractional or derivative-carrying exponent
/// - `ZeroBaseDualExponent`: zero base raised to a derivative-carrying exponent
/// - `Domain`: elementary function evaluated outside its real domain
///
/// # Examples
/// ```
/// use dual_core::types::DualError;
///
/// let err = DualError::Domain { function: "ln", argument: -1.0 };
/// assert_eq!(format!("{}", err), "Domain error: ln(-1) is undefined");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DualError {
    /// Divisor is zero and the quotient has no degenerate interpretation.
    #[error("Division by zero: {numerator} / {denominator}")]
    DivisionByZero {
        /// Rendered dividend
        numerator: String,
        /// Rendered divisor
        denominator: String,
    },

    /// Negative base with a non-integer or derivative-carrying exponent.
    #[error("Domain error: negative base {base} raised to non-integer or dual power {exponent}")]
    NegativeBase {
        /// Rendered base
        base: String,
        /// Rendered exponent
        exponent: String,
    },

    /// Zero base with a derivative-carrying exponent would need ln(0).
    #[error("Domain error: zero base {base} raised to dual power {exponent}")]
    ZeroBaseDualExponent {
        /// Rendered base
        base: String,
        /// Rendered exponent
        exponent: String,
    },

    /// Elementary function evaluated outside its real domain.
    #[error("Domain error: {function}({argument}) is undefined")]
    Domain {
        /// Registry name of the function
        function: &'static str,
        /// Innermost real value of the argument
        argument: f64,
    },
}

impl DualError {
    pub(crate) fn division_by_zero(
        numerator: impl std::fmt::Display,
        denominator: impl std::fmt::Display,
    ) -> Self {
        DualError::DivisionByZero {
            numerator: numerator.to_string(),
            denominator: denominator.to_string(),
        }
    }

    pub(crate) fn negative_base(
        base: impl std::fmt::Display,
        exponent: impl std::fmt::Display,
    ) -> Self {
        DualError::NegativeBase {
            base: base.to_string(),
            exponent: exponent.to_string(),
        }
    }

    /// Returns `true` for the domain family of errors.
    ///
    /// ```
    /// use dual_core::types::DualError;
    ///
    /// assert!(DualError::Domain { function: "ln", argument: 0.0 }.is_domain_error());
    /// ```
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            DualError::NegativeBase { .. }
                | DualError::ZeroBaseDualExponent { .. }
                | DualError::Domain { .. }
        )
    }
}
