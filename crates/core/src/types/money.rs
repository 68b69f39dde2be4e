//! Monetary amounts using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount with currency code.
///
/// Amounts use [`Decimal`] to preserve precision; the currency code is an
/// ISO 4217 string echoed from the fleet API (the API owns all pricing
/// logic, the client only aggregates and displays).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

impl Money {
    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: String) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub fn zero(currency_code: &str) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency_code: currency_code.to_owned(),
        }
    }

    /// Whether the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Add another amount in the same currency.
    ///
    /// Returns `None` when the currency codes differ; rollup aggregation
    /// must never silently mix currencies.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        if self.currency_code != other.currency_code {
            return None;
        }
        Some(Self {
            amount: self.amount + other.amount,
            currency_code: self.currency_code.clone(),
        })
    }

    /// Subtract another amount in the same currency.
    ///
    /// Returns `None` when the currency codes differ.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if self.currency_code != other.currency_code {
            return None;
        }
        Some(Self {
            amount: self.amount - other.amount,
            currency_code: self.currency_code.clone(),
        })
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency_code)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn usd(amount: &str) -> Money {
        Money::new(amount.parse().unwrap(), "USD".to_string())
    }

    #[test]
    fn test_zero() {
        let zero = Money::zero("USD");
        assert!(zero.is_zero());
        assert_eq!(zero.currency_code, "USD");
    }

    #[test]
    fn test_checked_add_same_currency() {
        let sum = usd("10.50").checked_add(&usd("4.25")).unwrap();
        assert_eq!(sum, usd("14.75"));
    }

    #[test]
    fn test_checked_add_mixed_currency() {
        let eur = Money::new("5".parse().unwrap(), "EUR".to_string());
        assert!(usd("10").checked_add(&eur).is_none());
    }

    #[test]
    fn test_checked_sub() {
        let diff = usd("10.00").checked_sub(&usd("2.50")).unwrap();
        assert_eq!(diff, usd("7.50"));
    }

    #[test]
    fn test_display() {
        assert_eq!(usd("19.99").to_string(), "19.99 USD");
    }
}
