//! The closed set of currencies the exchange form trades in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::fx_errors::FxError;

/// A currency supported by the exchange form.
///
/// The set is closed: the presentation layer only ever offers these
/// codes, so inside the core an unknown currency is unrepresentable.
/// Unknown code *strings* can only appear at a text boundary (config
/// files, serialized snapshots) and are rejected there by
/// [`Currency::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    USD,
    HKD,
    AUD,
    MYR,
    GBP,
    EUR,
    IDR,
    NZD,
    CNY,
    CZK,
    AED,
}

impl Currency {
    /// Every supported currency, in display order.
    pub const ALL: [Currency; 11] = [
        Currency::USD,
        Currency::HKD,
        Currency::AUD,
        Currency::MYR,
        Currency::GBP,
        Currency::EUR,
        Currency::IDR,
        Currency::NZD,
        Currency::CNY,
        Currency::CZK,
        Currency::AED,
    ];

    /// Number of supported currencies.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the ISO-style code for this currency.
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::HKD => "HKD",
            Currency::AUD => "AUD",
            Currency::MYR => "MYR",
            Currency::GBP => "GBP",
            Currency::EUR => "EUR",
            Currency::IDR => "IDR",
            Currency::NZD => "NZD",
            Currency::CNY => "CNY",
            Currency::CZK => "CZK",
            Currency::AED => "AED",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.as_str().to_string()
    }
}

impl FromStr for Currency {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "HKD" => Ok(Currency::HKD),
            "AUD" => Ok(Currency::AUD),
            "MYR" => Ok(Currency::MYR),
            "GBP" => Ok(Currency::GBP),
            "EUR" => Ok(Currency::EUR),
            "IDR" => Ok(Currency::IDR),
            "NZD" => Ok(Currency::NZD),
            "CNY" => Ok(Currency::CNY),
            "CZK" => Ok(Currency::CZK),
            "AED" => Ok(Currency::AED),
            _ => Err(FxError::UnknownCurrency(s.to_string())),
        }
    }
}
