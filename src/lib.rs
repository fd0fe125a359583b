//! Cambio Core - the currency exchange form's domain logic.
//!
//! This crate holds the rate table and fee-adjusted converter, the
//! exchange state machine, and the debounced session shell. It is
//! presentation-agnostic: a UI layer renders the state snapshots and
//! notifications this crate produces and feeds user input back in.

pub mod constants;
pub mod errors;
pub mod exchange;
pub mod fx;
pub mod notifications;
pub mod settings;

// Re-export the types a presentation layer needs day to day
pub use exchange::{ExchangeCommand, ExchangeService, ExchangeSession, ExchangeState};
pub use fx::{ConversionDirection, Currency, CurrencyConverter, RateTable};
pub use notifications::{Notification, NotificationKind, NotificationSink};
pub use settings::ExchangeSettings;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
