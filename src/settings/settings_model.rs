//! Configuration for the exchange form core.
//!
//! The rate table, fee, and timings are supplied as data rather than
//! baked into the state machine, so tests (and alternate deployments)
//! can swap them freely.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DEBOUNCE_DELAY_MS, DEFAULT_FEE_RATE, DEFAULT_NOTIFICATION_FADE_MS,
    DEFAULT_NOTIFICATION_VISIBLE_MS, DEFAULT_SUBMISSION_DELAY_MS,
};
use crate::errors::Result;
use crate::fx::{Currency, RateEntry, RateTable};

/// Tunable configuration for an exchange session.
///
/// Field defaults match the shipped deployment, so a partial (or
/// empty) JSON document deserializes into a working configuration.
/// Values are validated where they are consumed: the rate table in
/// [`RateTable::new`], the fee in `CurrencyConverter::new`, the currency
/// pair in `ExchangeService::new`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExchangeSettings {
    pub fee_rate: Decimal,
    pub initial_sell_currency: Currency,
    pub initial_buy_currency: Currency,
    pub debounce_delay_ms: u64,
    pub submission_delay_ms: u64,
    pub notification_visible_ms: u64,
    pub notification_fade_ms: u64,
    pub rates: Vec<RateEntry>,
}

impl Default for ExchangeSettings {
    fn default() -> Self {
        Self {
            fee_rate: DEFAULT_FEE_RATE,
            initial_sell_currency: Currency::USD,
            initial_buy_currency: Currency::MYR,
            debounce_delay_ms: DEFAULT_DEBOUNCE_DELAY_MS,
            submission_delay_ms: DEFAULT_SUBMISSION_DELAY_MS,
            notification_visible_ms: DEFAULT_NOTIFICATION_VISIBLE_MS,
            notification_fade_ms: DEFAULT_NOTIFICATION_FADE_MS,
            rates: RateTable::default_entries(),
        }
    }
}

impl ExchangeSettings {
    /// Parses settings from a JSON document. Missing fields keep their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }

    pub fn submission_delay(&self) -> Duration {
        Duration::from_millis(self.submission_delay_ms)
    }

    pub fn notification_visible(&self) -> Duration {
        Duration::from_millis(self.notification_visible_ms)
    }

    pub fn notification_fade(&self) -> Duration {
        Duration::from_millis(self.notification_fade_ms)
    }
}
