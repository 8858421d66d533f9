//! Error types for validation runs.

use thiserror::Error;

/// First failure of a validation run.
///
/// Every variant carries the 1-based case index, the case description and
/// the rendered input so the failing case can be identified without
/// re-running.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The callable returned a value the comparison rejected.
    #[error(
        "Test {index} FAILED: {description}\n\
         Input          : {input}\n\
         Expected       : {expected}\n\
         Got            : {actual}"
    )]
    Mismatch {
        /// 1-based case index
        index: usize,
        /// Case description
        description: String,
        /// Rendered input
        input: String,
        /// Rendered expected output
        expected: String,
        /// Rendered actual output
        actual: String,
    },

    /// The callable itself failed.
    #[error(
        "Test {index} ERROR: {description}\n\
         Input          : {input}\n\
         Exception      : {cause}"
    )]
    Evaluation {
        /// 1-based case index
        index: usize,
        /// Case description
        description: String,
        /// Rendered input
        input: String,
        /// Original error raised by the callable
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ValidationError {
    /// 1-based index of the failing case.
    pub fn index(&self) -> usize {
        match self {
            ValidationError::Mismatch { index, .. } | ValidationError::Evaluation { index, .. } => {
                *index
            }
        }
    }
}
