//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// Prices cannot be negative.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative price in the store currency.
///
/// Wraps a `Decimal` so that totals never accumulate float error, and
/// enforces non-negativity at construction (including deserialization).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Negative` if the amount is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply this price by a quantity, yielding a line total.
    #[must_use]
    pub fn times(self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_rejects_negative() {
        assert!(Price::new(dec("-0.01")).is_err());
        assert!(Price::new(dec("0")).is_ok());
        assert!(Price::new(dec("49.99")).is_ok());
    }

    #[test]
    fn test_from_cents() {
        assert_eq!(Price::from_cents(4999).amount(), dec("49.99"));
    }

    #[test]
    fn test_times() {
        let price = Price::from_cents(4999);
        assert_eq!(price.times(3), dec("149.97"));
        assert_eq!(price.times(0), Decimal::ZERO);
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_cents(4999).to_string(), "$49.99");
        assert_eq!(Price::from_cents(500).to_string(), "$5.00");
    }

    #[test]
    fn test_deserialize_enforces_non_negative() {
        let ok: Result<Price, _> = serde_json::from_str("\"12.50\"");
        assert!(ok.is_ok());

        let err: Result<Price, _> = serde_json::from_str("\"-1\"");
        assert!(err.is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(Price::from_cents(4999) < Price::from_cents(6999));
    }
}
