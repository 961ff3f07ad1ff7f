//! Abnormal failures raised while a request validates itself.
//!
//! A predicate can fail in several shapes: with a bare message, with a
//! structured error, or (when it panics) with an arbitrary payload. All of
//! them are normalised into [`ValidationFault`] at the point where they are
//! caught, so the mediator can format them uniformly.

use std::any::Any;
use std::error::Error as StdError;

use thiserror::Error;

/// Boxed structured error raised by a predicate.
pub type BoxedError = Box<dyn StdError + Send + Sync + 'static>;

/// A predicate failure normalised at the validation boundary.
///
/// The `Display` output is the detail appended to the `ValidationError: `
/// prefix when the fault is reported.
#[derive(Debug, Error)]
pub enum ValidationFault {
    /// The predicate failed with a plain textual message.
    #[error("{0}")]
    Message(String),

    /// The predicate failed with a structured error; its message is reported.
    #[error("{0}")]
    Structured(#[source] BoxedError),

    /// The predicate failed in a shape that carries no usable message.
    #[error("unable to validate request due unknown error")]
    Unrecognised,
}

impl ValidationFault {
    /// Wraps a structured error raised by a predicate.
    ///
    /// # Example
    ///
    /// ```
    /// use mediator::ValidationFault;
    ///
    /// let fault = ValidationFault::structured(std::io::Error::other("bad input"));
    /// assert_eq!(fault.to_string(), "bad input");
    /// ```
    #[must_use]
    pub fn structured(error: impl Into<BoxedError>) -> Self {
        Self::Structured(error.into())
    }

    /// Classifies a panic payload caught from a predicate.
    ///
    /// A [`BoxedError`] payload, raised with `std::panic::panic_any`, is
    /// structured and keeps its message. `&str` and `String` payloads, which
    /// is what `panic!` produces, keep their text. Anything else is
    /// unrecognised.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        match payload.downcast::<BoxedError>() {
            Ok(error) => Self::Structured(*error),
            Err(other) => other
                .downcast_ref::<&'static str>()
                .map(|text| (*text).to_owned())
                .or_else(|| other.downcast_ref::<String>().cloned())
                .map_or(Self::Unrecognised, Self::Message),
        }
    }
}

impl From<String> for ValidationFault {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for ValidationFault {
    fn from(message: &str) -> Self {
        Self::Message(message.to_owned())
    }
}
