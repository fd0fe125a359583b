use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::fx_errors::FxError;

/// A single configured exchange rate: units of `currency` per one unit
/// of the base currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateEntry {
    pub currency: Currency,
    pub rate: Decimal,
}

impl RateEntry {
    pub fn new(currency: Currency, rate: Decimal) -> Self {
        Self { currency, rate }
    }
}

/// Immutable mapping from currency to its rate against the base currency.
///
/// Constructed once from configuration data and never mutated. Validation
/// happens up front so lookups are infallible: every currency has exactly
/// one strictly positive rate, and the base currency's rate is exactly 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    rates: [Decimal; Currency::COUNT],
}

impl RateTable {
    /// The currency all rates are expressed against.
    pub const BASE_CURRENCY: Currency = Currency::USD;

    /// Builds a validated table from configured entries.
    pub fn new(entries: &[RateEntry]) -> Result<Self, FxError> {
        let mut rates = [Decimal::ZERO; Currency::COUNT];
        let mut seen = [false; Currency::COUNT];

        for entry in entries {
            let idx = entry.currency.index();
            if seen[idx] {
                return Err(FxError::DuplicateRate(entry.currency));
            }
            if entry.rate <= Decimal::ZERO {
                return Err(FxError::InvalidRate {
                    currency: entry.currency,
                    rate: entry.rate,
                });
            }
            seen[idx] = true;
            rates[idx] = entry.rate;
        }

        for currency in Currency::ALL {
            if !seen[currency.index()] {
                return Err(FxError::MissingRate(currency));
            }
        }

        let base_rate = rates[Self::BASE_CURRENCY.index()];
        if base_rate != Decimal::ONE {
            return Err(FxError::BaseRateMismatch(Self::BASE_CURRENCY, base_rate));
        }

        Ok(Self { rates })
    }

    /// The rate entries the application ships with.
    pub fn default_entries() -> Vec<RateEntry> {
        vec![
            RateEntry::new(Currency::USD, dec!(1)),
            RateEntry::new(Currency::HKD, dec!(7.798926)),
            RateEntry::new(Currency::AUD, dec!(1.487089)),
            RateEntry::new(Currency::MYR, dec!(4.375)),
            RateEntry::new(Currency::GBP, dec!(0.761538)),
            RateEntry::new(Currency::EUR, dec!(0.899038)),
            RateEntry::new(Currency::IDR, dec!(15538.905259)),
            RateEntry::new(Currency::NZD, dec!(1.625053)),
            RateEntry::new(Currency::CNY, dec!(7.1369)),
            RateEntry::new(Currency::CZK, dec!(22.549)),
            RateEntry::new(Currency::AED, dec!(3.672815)),
        ]
    }

    /// The table built from [`RateTable::default_entries`].
    pub fn default_table() -> Self {
        // The default entries are complete literals, so this cannot fail.
        let mut rates = [Decimal::ZERO; Currency::COUNT];
        for entry in Self::default_entries() {
            rates[entry.currency.index()] = entry.rate;
        }
        Self { rates }
    }

    /// Units of `currency` per one unit of the base currency.
    pub fn rate(&self, currency: Currency) -> Decimal {
        self.rates[currency.index()]
    }
}
