//! Crate-level test doubles and BDD tests.

use std::cell::Cell;
use std::io;
use std::panic;

use mockall::mock;

use crate::fault::{BoxedError, ValidationFault};
use crate::request::{Handler, Request};


/// How a test request answers its validation predicate.
#[derive(Debug, Default, Clone)]
pub(crate) enum Verdict {
    #[default]
    Valid,
    Invalid,
    Message(String),
    Structured(String),
    PanicMessage(String),
    PanicStructured(String),
    PanicUnrecognised,
}

impl Verdict {
    #[expect(
        clippy::panic_in_result_fn,
        reason = "panicking verdicts exercise the mediator's panic capture"
    )]
    pub(crate) fn evaluate(&self) -> Result<bool, ValidationFault> {
        match self {
            Self::Valid => Ok(true),
            Self::Invalid => Ok(false),
            Self::Message(text) => Err(ValidationFault::from(text.as_str())),
            Self::Structured(text) => Err(ValidationFault::structured(io::Error::other(
                text.as_str(),
            ))),
            Self::PanicMessage(text) => panic!("{text}"),
            Self::PanicStructured(text) => {
                panic::panic_any::<BoxedError>(io::Error::other(text.as_str()).into())
            }
            Self::PanicUnrecognised => panic::panic_any(42_i32),
        }
    }
}

mock! {
    pub CommandHandler {}
    impl Handler<Command> for CommandHandler {
        fn handle(&self, request: &Command) -> u32;
    }
}

/// Request whose handler is a mockall double.
pub(crate) struct Command {
    value: u32,
    verdict: Verdict,
    handler: MockCommandHandler,
}

impl Command {
    pub(crate) const fn new(value: u32, verdict: Verdict, handler: MockCommandHandler) -> Self {
        Self {
            value,
            verdict,
            handler,
        }
    }

    pub(crate) const fn value(&self) -> u32 {
        self.value
    }
}

impl Request for Command {
    type Response = u32;
    type Handler = MockCommandHandler;

    fn handler(&self) -> &MockCommandHandler {
        &self.handler
    }

    fn validate(&self) -> Result<bool, ValidationFault> {
        self.verdict.evaluate()
    }
}

/// Handler that echoes the request value and counts its invocations.
#[derive(Debug, Default)]
pub(crate) struct EchoHandler {
    calls: Cell<usize>,
}

impl EchoHandler {
    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Handler<Probe> for EchoHandler {
    fn handle(&self, request: &Probe) -> u32 {
        self.calls.set(self.calls.get() + 1);
        request.value
    }
}

/// Request paired with an [`EchoHandler`].
#[derive(Debug)]
pub(crate) struct Probe {
    value: u32,
    verdict: Verdict,
    handler: EchoHandler,
}

impl Probe {
    pub(crate) fn new(value: u32, verdict: Verdict) -> Self {
        Self {
            value,
            verdict,
            handler: EchoHandler::default(),
        }
    }
}

impl Request for Probe {
    type Response = u32;
    type Handler = EchoHandler;

    fn handler(&self) -> &EchoHandler {
        &self.handler
    }

    fn validate(&self) -> Result<bool, ValidationFault> {
        self.verdict.evaluate()
    }
}
