//! Request and handler contracts.
//!
//! A [`Request`] names its response type and the [`Handler`] that produces
//! it. Because the handler is an associated type bounded by
//! `Handler<Self>`, a request can only ever be paired with a handler whose
//! output is exactly `Self::Response`; mismatches are compile errors rather
//! than runtime surprises.

use crate::fault::ValidationFault;

/// A value describing one operation, carrying its own handler and predicate.
///
/// Requests are built by the caller with every field populated. The mediator
/// only borrows them, for the duration of a single dispatch.
///
/// Handlers that can fail should choose a `Result` as the
/// [`Response`](Request::Response); the mediator passes it back verbatim.
pub trait Request: Sized {
    /// The value produced when this request is handled.
    type Response;

    /// The handler answering this request.
    type Handler: Handler<Self>;

    /// Returns the handler referenced by this request.
    fn handler(&self) -> &Self::Handler;

    /// Checks whether the request data is well formed.
    ///
    /// Returning `Ok(false)` rejects the request. Returning an error, or
    /// panicking, is treated as an abnormal failure of the predicate; in both
    /// cases the handler is not invoked.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationFault`] when the predicate cannot reach a
    /// verdict.
    fn validate(&self) -> Result<bool, ValidationFault>;
}

/// Performs the operation described by a request of type `R`.
pub trait Handler<R: Request> {
    /// Handles a request that has already passed validation.
    fn handle(&self, request: &R) -> R::Response;
}
