//! Core error types for the exchange form.
//!
//! Domain modules define their own error enums; this module folds them
//! into a single `Error` for the crate boundary.

use thiserror::Error;

use crate::exchange::ExchangeError;
use crate::fx::FxError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the exchange core.
///
/// Invalid user-entered amounts never reach this type: they degrade to
/// empty amounts inside the converter. What remains is configuration
/// problems and submission-flow errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Exchange error: {0}")]
    Exchange(#[from] ExchangeError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidConfigValue(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
