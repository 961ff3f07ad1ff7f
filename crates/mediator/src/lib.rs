//! Validate-then-dispatch mediator for request and handler pairs.
//!
//! A [`Request`] carries its own validation predicate and a reference to the
//! [`Handler`] that knows how to answer it. The mediator runs the predicate
//! and, only when it passes, hands the request to that handler. Any failure
//! to validate becomes a [`ValidationError`]; whatever the handler produces
//! is returned to the caller untouched.
//!
//! The dispatch logic exists once, in [`send`]. Callers that prefer an
//! injected collaborator use [`Mediator`], which delegates to the same code
//! and can be abstracted behind the [`Dispatch`] trait.
//!
//! There is no routing table, middleware, or async dispatch: each call is a
//! single synchronous indirection.
//!
//! # Example
//!
//! ```
//! use mediator::{Handler, Request, ValidationFault};
//!
//! struct Doubler;
//!
//! impl Handler<Double> for Doubler {
//!     fn handle(&self, request: &Double) -> u32 {
//!         request.value * 2
//!     }
//! }
//!
//! struct Double {
//!     value: u32,
//!     handler: Doubler,
//! }
//!
//! impl Request for Double {
//!     type Response = u32;
//!     type Handler = Doubler;
//!
//!     fn handler(&self) -> &Doubler {
//!         &self.handler
//!     }
//!
//!     fn validate(&self) -> Result<bool, ValidationFault> {
//!         Ok(self.value < 1_000)
//!     }
//! }
//!
//! let response = mediator::send(&Double { value: 21, handler: Doubler });
//! assert_eq!(response.ok(), Some(42));
//!
//! let error = mediator::send(&Double { value: 5_000, handler: Doubler })
//!     .expect_err("oversized values are rejected");
//! assert_eq!(error.to_string(), "ValidationError: request validation is false");
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod fault;
pub mod request;

#[cfg(test)]
mod tests;

pub use self::config::MediatorConfig;
pub use self::dispatch::{Dispatch, Mediator, send};
pub use self::error::ValidationError;
pub use self::fault::ValidationFault;
pub use self::request::{Handler, Request};
