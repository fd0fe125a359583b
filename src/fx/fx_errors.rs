use rust_decimal::Decimal;
use thiserror::Error;

use super::currency::Currency;

/// Errors raised while building or querying FX configuration.
///
/// These only surface at construction/parsing boundaries. Amount
/// conversion itself never fails: unusable input text converts to an
/// empty amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FxError {
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    #[error("Missing exchange rate for {0}")]
    MissingRate(Currency),

    #[error("Duplicate exchange rate for {0}")]
    DuplicateRate(Currency),

    #[error("Invalid exchange rate for {currency}: {rate} (rates must be strictly positive)")]
    InvalidRate { currency: Currency, rate: Decimal },

    #[error("Base currency {0} must have a rate of exactly 1, got {1}")]
    BaseRateMismatch(Currency, Decimal),

    #[error("Invalid fee rate: {0} (expected 0 <= fee < 1)")]
    InvalidFeeRate(Decimal),
}
