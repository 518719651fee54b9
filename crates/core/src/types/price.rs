//! Price representation using decimal arithmetic.
//!
//! Catalog prices are free-form strings such as `"250 ₽"` or `"1 200₽"`.
//! Arithmetic only ever needs the whole-ruble amount, which is recovered by
//! keeping the digits and dropping everything else.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (rubles, not kopecks).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero amount in the storefront currency.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(Decimal::ZERO, CurrencyCode::RUB)
    }

    /// Parse a catalog price string into a ruble price.
    ///
    /// See [`parse_amount`] for the digit-extraction rule.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::new(parse_amount(text), CurrencyCode::RUB)
    }

    /// Format for display (e.g., "1250 ₽").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {}", self.amount.normalize(), self.currency_code.symbol())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    RUB,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Currency glyph used when rendering amounts.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::RUB => "₽",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::RUB => "RUB",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}

/// Extract the amount from a catalog price string.
///
/// Every ASCII digit is kept, in order, and everything else is discarded, so
/// `"1 250 ₽"` reads as `1250`. A string with no digits reads as zero.
/// Separators are never interpreted: `"12.50"` reads as `1250`. Digit runs too
/// long for a `Decimal` saturate at `Decimal::MAX`.
#[must_use]
pub fn parse_amount(text: &str) -> Decimal {
    text.chars()
        .filter_map(|c| c.to_digit(10))
        .try_fold(Decimal::ZERO, |acc, digit| {
            acc.checked_mul(Decimal::TEN)?
                .checked_add(Decimal::from(digit))
        })
        .unwrap_or(Decimal::MAX)
}

/// Append the ruble glyph after the first run of digits.
///
/// `"250"` becomes `"250 ₽"`; strings without digits are returned unchanged.
#[must_use]
pub fn format_price(text: &str) -> String {
    let Some(start) = text.find(|c: char| c.is_ascii_digit()) else {
        return text.to_string();
    };
    let end = text[start..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text.len(), |offset| start + offset);

    format!(
        "{} {}{}",
        &text[..end],
        CurrencyCode::RUB.symbol(),
        &text[end..]
    )
}
