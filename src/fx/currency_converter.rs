use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use super::currency::Currency;
use super::fx_errors::FxError;
use super::fx_model::RateTable;
use crate::constants::AMOUNT_DECIMAL_PLACES;

/// Which way an amount conversion runs.
///
/// `Forward` derives a buy amount from a known sell amount, deducting the
/// fee from the sell side before the cross rate. `Reverse` derives the
/// required sell amount from a desired buy amount, inflating the result to
/// cover the fee that a forward conversion will deduct. The two are not
/// symmetric in where the fee lands; that placement is part of the
/// contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConversionDirection {
    Forward,
    Reverse,
}

/// Pure amount converter over an immutable [`RateTable`].
///
/// For both directions the `from`/`to` pair is always
/// (sell currency, buy currency); the direction selects which side the
/// given amount belongs to.
#[derive(Debug, Clone)]
pub struct CurrencyConverter {
    rates: RateTable,
    fee_rate: Decimal,
}

impl CurrencyConverter {
    /// Creates a converter with the given table and flat fee rate.
    pub fn new(rates: RateTable, fee_rate: Decimal) -> Result<Self, FxError> {
        if fee_rate < Decimal::ZERO || fee_rate >= Decimal::ONE {
            return Err(FxError::InvalidFeeRate(fee_rate));
        }
        Ok(Self { rates, fee_rate })
    }

    /// Units of `currency` per one unit of the base currency.
    pub fn rate(&self, currency: Currency) -> Decimal {
        self.rates.rate(currency)
    }

    pub fn fee_rate(&self) -> Decimal {
        self.fee_rate
    }

    /// Converts user-entered amount text between the sell and buy side.
    ///
    /// Empty, unparsable, zero, or negative input yields an empty string:
    /// "no amount entered" is not an error. Results are rounded to six
    /// decimal places with trailing zeros stripped; a result that rounds
    /// to zero also yields an empty string.
    pub fn convert_amount(
        &self,
        amount: &str,
        from: Currency,
        to: Currency,
        direction: ConversionDirection,
    ) -> String {
        let amount = match parse_amount(amount) {
            Some(value) => value,
            None => return String::new(),
        };

        let fee_keep = Decimal::ONE - self.fee_rate;
        let result = match direction {
            ConversionDirection::Forward => {
                amount * fee_keep * self.rates.rate(to) / self.rates.rate(from)
            }
            ConversionDirection::Reverse => {
                amount * self.rates.rate(from) / self.rates.rate(to) / fee_keep
            }
        };

        format_amount(result)
    }

    /// The indicative rate shown next to the form: how many units of `to`
    /// one unit of `from` buys. No fee is applied here; the fee is only
    /// embedded in converted amounts.
    pub fn exchange_rate(&self, from: Currency, to: Currency) -> String {
        format_amount(self.rates.rate(to) / self.rates.rate(from))
    }
}

/// Parses decimal text as a usable amount.
///
/// Returns `None` for empty, unparsable, zero, or negative text. A single
/// trailing decimal point ("12.") is tolerated, matching what a user has
/// mid-keystroke.
pub(crate) fn parse_amount(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let value = match Decimal::from_str(text) {
        Ok(value) => Some(value),
        Err(_) => {
            let trimmed = text.strip_suffix('.')?;
            if trimmed.is_empty() || trimmed.contains('.') {
                return None;
            }
            Decimal::from_str(trimmed).ok()
        }
    }?;

    if value.is_zero() || value.is_sign_negative() {
        return None;
    }
    Some(value)
}

/// Rounds to six decimal places and strips trailing zeros and any
/// trailing decimal point. Zero formats as the empty string.
pub(crate) fn format_amount(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(AMOUNT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    if rounded.is_zero() {
        String::new()
    } else {
        rounded.to_string()
    }
}
