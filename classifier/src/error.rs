//! Error types for package classification.

use thiserror::Error;

/// Classifier result type alias
pub type Result<T> = std::result::Result<T, ClassifyError>;

/// Errors raised before classification starts.
///
/// Classification itself is total over validated input, so the only
/// failure is a measurement the caller should never have passed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// A measurement was negative.
    #[error("{argument} must be greater than 0")]
    InvalidArgument { argument: &'static str },
}

impl ClassifyError {
    /// Name of the offending argument (`"width"`, `"height"`, `"length"` or `"mass"`).
    pub fn argument(&self) -> &'static str {
        match self {
            ClassifyError::InvalidArgument { argument } => argument,
        }
    }
}
