//! Mediator configuration.

/// Settings for a [`Mediator`](crate::Mediator) instance.
///
/// # Example
///
/// ```
/// use mediator::{Mediator, MediatorConfig};
///
/// let mediator = Mediator::with_config(MediatorConfig::new(false));
/// assert!(!mediator.config().capture_panics());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediatorConfig {
    capture_panics: bool,
}

impl MediatorConfig {
    /// Creates a configuration.
    ///
    /// When `capture_panics` is `false`, a panicking predicate unwinds
    /// through the mediator instead of becoming a `ValidationError`.
    #[must_use]
    pub const fn new(capture_panics: bool) -> Self {
        Self { capture_panics }
    }

    /// Whether predicate panics are converted into validation errors.
    ///
    /// Capture happens after unwinding, so the process panic hook has
    /// already run. Install a quiet hook with `std::panic::set_hook` if the
    /// default stderr report is unwanted.
    #[must_use]
    pub const fn capture_panics(&self) -> bool {
        self.capture_panics
    }
}

impl Default for MediatorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}
