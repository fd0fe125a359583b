use serde::{Deserialize, Serialize};

use crate::fx::Currency;

/// The committed state of the exchange form.
///
/// Amounts are decimal text exactly as committed, preserving user-typed
/// detail such as a trailing decimal point. At most one amount is
/// authoritative per transition; the other is always derived through the
/// converter, never edited independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeState {
    pub sell_amount: String,
    pub sell_currency: Currency,
    pub buy_amount: String,
    pub buy_currency: Currency,
}

impl ExchangeState {
    /// An empty form over the given currency pair.
    pub fn initial(sell_currency: Currency, buy_currency: Currency) -> Self {
        Self {
            sell_amount: String::new(),
            sell_currency,
            buy_amount: String::new(),
            buy_currency,
        }
    }

    /// Whether the form is complete enough to submit.
    pub fn is_submittable(&self) -> bool {
        !self.sell_amount.is_empty() && !self.buy_amount.is_empty()
    }

    pub(crate) fn clear_amounts(&mut self) {
        self.sell_amount.clear();
        self.buy_amount.clear();
    }
}

/// A transition request against the exchange state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ExchangeCommand {
    SetSellAmount(String),
    SetBuyAmount(String),
    SetSellCurrency(Currency),
    SetBuyCurrency(Currency),
    SwapCurrencies,
    SubmitForm,
}

/// The four-tuple captured at the moment the user submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeOrder {
    pub sell_amount: String,
    pub sell_currency: Currency,
    pub buy_amount: String,
    pub buy_currency: Currency,
}

impl ExchangeOrder {
    pub(crate) fn from_state(state: &ExchangeState) -> Self {
        Self {
            sell_amount: state.sell_amount.clone(),
            sell_currency: state.sell_currency,
            buy_amount: state.buy_amount.clone(),
            buy_currency: state.buy_currency,
        }
    }
}
