//! The error returned when a request does not pass validation.
//!
//! Both a predicate that answers `false` and a predicate that fails
//! abnormally surface as the same [`ValidationError`] type. The variant
//! records which of the two happened; the message format is shared.

use thiserror::Error;

use crate::fault::ValidationFault;

/// Raised by the mediator when a request fails validation.
///
/// The handler is never invoked for a request that produced this error.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The request predicate returned `false`.
    #[error("ValidationError: request validation is false")]
    Rejected,

    /// The request predicate failed before reaching a verdict.
    #[error("ValidationError: {0}")]
    Faulted(#[from] ValidationFault),
}

impl ValidationError {
    /// Returns the human-readable message, prefix included.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns the predicate fault, if the predicate failed abnormally.
    #[must_use]
    pub const fn fault(&self) -> Option<&ValidationFault> {
        match self {
            Self::Rejected => None,
            Self::Faulted(fault) => Some(fault),
        }
    }

    /// Returns `true` when the predicate answered `false`.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}
