//! Validation followed by delegation to the request's handler.
//!
//! [`send`] is the primary entry point. [`Mediator`] offers the same
//! operation as a value that can be injected into services, optionally with
//! a non-default [`MediatorConfig`]. Both run through one private routine,
//! so the two call styles cannot drift apart.

use std::any::type_name;
use std::panic::{self, AssertUnwindSafe};

use tracing::debug;

use crate::config::MediatorConfig;
use crate::error::ValidationError;
use crate::fault::ValidationFault;
use crate::request::{Handler, Request};

/// Tracing target for dispatch decisions.
const DISPATCH_TARGET: &str = "mediator::dispatch";

/// Validates `request` and, if it passes, returns its handler's response.
///
/// The response is returned exactly as the handler produced it. Panics raised
/// by the handler are not intercepted.
///
/// A panicking predicate is converted into an error, but the process panic
/// hook still runs first; with the default hook that prints the panic
/// message to stderr.
///
/// # Errors
///
/// Returns [`ValidationError::Rejected`] when the predicate answers `false`
/// and [`ValidationError::Faulted`] when it fails or panics.
pub fn send<R: Request>(request: &R) -> Result<R::Response, ValidationError> {
    dispatch(MediatorConfig::default(), request)
}

/// Abstraction over the mediator for callers that take it as a dependency.
///
/// # Example
///
/// ```
/// use mediator::{Dispatch, Mediator, Request, ValidationError};
///
/// struct Service<D> {
///     dispatcher: D,
/// }
///
/// impl<D: Dispatch> Service<D> {
///     fn run<R: Request>(&self, request: &R) -> Result<R::Response, ValidationError> {
///         self.dispatcher.send(request)
///     }
/// }
///
/// let service = Service { dispatcher: Mediator::new() };
/// # let _ = &service;
/// ```
pub trait Dispatch {
    /// Validates `request` and, if it passes, returns its handler's response.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the request fails validation.
    fn send<R: Request>(&self, request: &R) -> Result<R::Response, ValidationError>;
}

/// Injectable form of [`send`].
///
/// A `Mediator` holds no state beyond its configuration; it is `Copy`, and a
/// single instance may be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mediator {
    config: MediatorConfig,
}

impl Mediator {
    /// Creates a mediator with the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_config(MediatorConfig::new(true))
    }

    /// Creates a mediator with the given configuration.
    #[must_use]
    pub const fn with_config(config: MediatorConfig) -> Self {
        Self { config }
    }

    /// Returns the mediator configuration.
    #[must_use]
    pub const fn config(&self) -> &MediatorConfig {
        &self.config
    }

    /// Validates `request` and, if it passes, returns its handler's response.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when the request fails validation.
    pub fn send<R: Request>(&self, request: &R) -> Result<R::Response, ValidationError> {
        dispatch(self.config, request)
    }
}

impl Dispatch for Mediator {
    fn send<R: Request>(&self, request: &R) -> Result<R::Response, ValidationError> {
        Self::send(self, request)
    }
}

fn dispatch<R: Request>(
    config: MediatorConfig,
    request: &R,
) -> Result<R::Response, ValidationError> {
    validate(config, request)?;
    Ok(request.handler().handle(request))
}

fn validate<R: Request>(config: MediatorConfig, request: &R) -> Result<(), ValidationError> {
    let verdict = if config.capture_panics() {
        panic::catch_unwind(AssertUnwindSafe(|| request.validate()))
            .unwrap_or_else(|payload| Err(ValidationFault::from_panic(payload)))
    } else {
        request.validate()
    };

    match verdict {
        Ok(true) => Ok(()),
        Ok(false) => {
            debug!(
                target: DISPATCH_TARGET,
                request = type_name::<R>(),
                "request rejected by its predicate"
            );
            Err(ValidationError::Rejected)
        }
        Err(fault) => {
            debug!(
                target: DISPATCH_TARGET,
                request = type_name::<R>(),
                fault = %fault,
                "request predicate failed"
            );
            Err(ValidationError::Faulted(fault))
        }
    }
}
