//! FX module - the closed currency set, the rate table, and the converter.

pub mod currency;
mod currency_converter;
mod fx_errors;
mod fx_model;

pub use currency::Currency;
pub use currency_converter::{ConversionDirection, CurrencyConverter};
pub use fx_errors::FxError;
pub use fx_model::{RateEntry, RateTable};

pub(crate) use currency_converter::parse_amount;
