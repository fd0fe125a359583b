use std::sync::Arc;

use log::debug;

use super::exchange_model::{ExchangeCommand, ExchangeState};
use crate::errors::{Error, Result};
use crate::fx::{parse_amount, ConversionDirection, Currency, CurrencyConverter};

/// Applies [`ExchangeCommand`]s to [`ExchangeState`]s.
///
/// The service is stateless: `transition` is a pure function of its
/// inputs, so the recalculation rules are unit-testable without any
/// timing dependency. The session shell owns the committed state and
/// the timers.
///
/// Amounts are recomputed from whichever side was last explicitly
/// edited, so the non-edited side never drifts on its own. Selecting
/// the counterpart's currency swaps the pair instead of rejecting,
/// keeping the two sides distinct after every currency transition.
pub struct ExchangeService {
    converter: Arc<CurrencyConverter>,
    initial_sell: Currency,
    initial_buy: Currency,
}

impl ExchangeService {
    pub fn new(
        converter: Arc<CurrencyConverter>,
        initial_sell: Currency,
        initial_buy: Currency,
    ) -> Result<Self> {
        if initial_sell == initial_buy {
            return Err(Error::InvalidConfigValue(format!(
                "initial sell and buy currencies must differ, got {} on both sides",
                initial_sell
            )));
        }
        Ok(Self {
            converter,
            initial_sell,
            initial_buy,
        })
    }

    /// The empty form this service resets to.
    pub fn initial_state(&self) -> ExchangeState {
        ExchangeState::initial(self.initial_sell, self.initial_buy)
    }

    pub fn converter(&self) -> &CurrencyConverter {
        &self.converter
    }

    /// The indicative sell-to-buy rate for the given state, fee-free.
    pub fn display_rate(&self, state: &ExchangeState) -> String {
        self.converter
            .exchange_rate(state.sell_currency, state.buy_currency)
    }

    /// Computes the state after `command`.
    pub fn transition(&self, state: &ExchangeState, command: ExchangeCommand) -> ExchangeState {
        match command {
            ExchangeCommand::SetSellAmount(value) => self.set_sell_amount(state, value),
            ExchangeCommand::SetBuyAmount(value) => self.set_buy_amount(state, value),
            ExchangeCommand::SetSellCurrency(currency) => self.set_sell_currency(state, currency),
            ExchangeCommand::SetBuyCurrency(currency) => self.set_buy_currency(state, currency),
            ExchangeCommand::SwapCurrencies => self.swap(state, state.buy_amount.clone()),
            ExchangeCommand::SubmitForm => self.initial_state(),
        }
    }

    fn set_sell_amount(&self, state: &ExchangeState, value: String) -> ExchangeState {
        let mut next = state.clone();
        if parse_amount(&value).is_none() {
            debug!("sell input unusable, clearing both amounts");
            next.clear_amounts();
            return next;
        }

        next.buy_amount = self.converter.convert_amount(
            &value,
            next.sell_currency,
            next.buy_currency,
            ConversionDirection::Forward,
        );
        next.sell_amount = value;
        next
    }

    fn set_buy_amount(&self, state: &ExchangeState, value: String) -> ExchangeState {
        let mut next = state.clone();
        if parse_amount(&value).is_none() {
            debug!("buy input unusable, clearing both amounts");
            next.clear_amounts();
            return next;
        }

        next.sell_amount = self.converter.convert_amount(
            &value,
            next.sell_currency,
            next.buy_currency,
            ConversionDirection::Reverse,
        );
        next.buy_amount = value;
        next
    }

    fn set_sell_currency(&self, state: &ExchangeState, currency: Currency) -> ExchangeState {
        // Selecting the counterpart's currency means "swap", not "reject".
        if currency == state.buy_currency {
            return self.swap(state, state.sell_amount.clone());
        }

        let mut next = state.clone();
        next.sell_currency = currency;
        self.rederive_forward(&mut next);
        next
    }

    fn set_buy_currency(&self, state: &ExchangeState, currency: Currency) -> ExchangeState {
        if currency == state.sell_currency {
            return self.swap(state, state.sell_amount.clone());
        }

        let mut next = state.clone();
        next.buy_currency = currency;
        self.rederive_forward(&mut next);
        next
    }

    /// Swaps the currency pair and installs `sell_amount` as the new sell
    /// amount, then rederives the buy side with the post-swap currencies.
    fn swap(&self, state: &ExchangeState, sell_amount: String) -> ExchangeState {
        let mut next = state.clone();
        next.sell_currency = state.buy_currency;
        next.buy_currency = state.sell_currency;
        next.sell_amount = sell_amount;
        self.rederive_forward(&mut next);
        next
    }

    /// Recomputes `buy_amount` from `sell_amount` with the state's current
    /// currency pair. An unusable sell amount clears both sides.
    fn rederive_forward(&self, state: &mut ExchangeState) {
        if parse_amount(&state.sell_amount).is_none() {
            state.clear_amounts();
            return;
        }
        state.buy_amount = self.converter.convert_amount(
            &state.sell_amount,
            state.sell_currency,
            state.buy_currency,
            ConversionDirection::Forward,
        );
    }
}
