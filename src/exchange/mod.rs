//! Exchange module - the form's state machine, session shell, and
//! submission handling.
//!
//! The state machine itself is a pure transition function
//! ([`ExchangeService::transition`]); [`ExchangeSession`] is the thin
//! imperative shell that owns the committed state, the debounce timers,
//! and the submission gate.

mod debounce;
mod exchange_errors;
mod exchange_model;
mod exchange_service;
mod exchange_session;
mod submission;

#[cfg(test)]
mod exchange_service_tests;

pub use exchange_errors::ExchangeError;
pub use exchange_model::{ExchangeCommand, ExchangeOrder, ExchangeState};
pub use exchange_service::ExchangeService;
pub use exchange_session::{ExchangeSession, Side};
pub use submission::{SimulatedSubmissionHandler, SubmissionHandler};
