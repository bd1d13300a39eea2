//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices arrive as floating-point JSON numbers; they are converted
//! to [`rust_decimal::Decimal`] at the boundary so cart totals are exact.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
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

    /// A zero price in the default currency.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            amount: Decimal::ZERO,
            currency_code: CurrencyCode::USD,
        }
    }

    /// The price multiplied by a line quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Decimal {
        self.amount * Decimal::from(quantity)
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency_code.symbol(), self.amount)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// The display symbol for this currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn usd(s: &str) -> Price {
        Price::new(s.parse().unwrap(), CurrencyCode::USD)
    }

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(usd("9.99").display(), "$9.99");
        assert_eq!(usd("10").display(), "$10.00");
        assert_eq!(usd("0").display(), "$0.00");
    }

    #[test]
    fn test_times_is_exact() {
        // 0.1 * 3 would drift with binary floats
        assert_eq!(usd("0.1").times(3), "0.3".parse::<Decimal>().unwrap());
        assert_eq!(usd("9.99").times(2), "19.98".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_zero() {
        assert_eq!(Price::zero().amount, Decimal::ZERO);
        assert_eq!(Price::zero().display(), "$0.00");
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(CurrencyCode::USD.symbol(), "$");
        assert_eq!(CurrencyCode::EUR.symbol(), "\u{20ac}");
        assert_eq!(CurrencyCode::GBP.symbol(), "\u{a3}");
    }
}
