//! Prices
//!
//! Display formatting for decimal amounts. The storefront prices everything
//! in Argentine pesos; callers with other needs can pass an explicit
//! currency.

use rust_decimal::Decimal;
use rusty_money::{Money, iso};

/// Default display currency.
pub const DEFAULT_CURRENCY: &iso::Currency = iso::ARS;

/// Format an amount in the default storefront currency.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format_price_in(amount, DEFAULT_CURRENCY)
}

/// Format an amount in an explicit currency.
#[must_use]
pub fn format_price_in(amount: Decimal, currency: &'static iso::Currency) -> String {
    Money::from_decimal(amount, currency).to_string()
}
