//! Amount type for expense values
//!
//! Stores the value as a full-precision f64 so exported amounts round-trip
//! exactly as entered; rounding to two decimals happens only at display
//! time. Amounts are signed, a refund is simply a negative expense.

use std::fmt;
use std::ops::{Add, AddAssign, Neg};

use crate::error::{OutlayError, OutlayResult};

/// The currency symbol prefixed to every displayed amount
pub const CURRENCY_SYMBOL: &str = "₹";

/// A signed expense amount held at full precision
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    /// Create an Amount from a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero Amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse an amount from user-entered text
    ///
    /// Surrounding whitespace is ignored. Empty input is a missing field;
    /// text that is not a finite real number is an invalid amount.
    pub fn parse(s: &str) -> OutlayResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(OutlayError::missing_amount());
        }
        let value: f64 = s.parse().map_err(|_| OutlayError::InvalidAmount)?;
        // NaN or infinity would poison the running total for good
        if !value.is_finite() {
            return Err(OutlayError::InvalidAmount);
        }
        Ok(Self(value))
    }

    /// Format rounded to two decimals with a currency symbol prefix
    ///
    /// The sign sits between the symbol and the digits: `₹-5.00`.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{:.2}", symbol, self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", CURRENCY_SYMBOL, self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("10.50").unwrap().value(), 10.5);
        assert_eq!(Amount::parse("-10.50").unwrap().value(), -10.5);
        assert_eq!(Amount::parse("10").unwrap().value(), 10.0);
        assert_eq!(Amount::parse(" 4.555 ").unwrap().value(), 4.555);
        assert_eq!(Amount::parse("0.05").unwrap().value(), 0.05);
    }

    #[test]
    fn test_parse_empty_is_missing_field() {
        assert!(matches!(
            Amount::parse(""),
            Err(OutlayError::MissingField("amount"))
        ));
        assert!(matches!(
            Amount::parse("   "),
            Err(OutlayError::MissingField("amount"))
        ));
    }

    #[test]
    fn test_parse_rejects_text() {
        assert!(matches!(
            Amount::parse("abc"),
            Err(OutlayError::InvalidAmount)
        ));
        assert!(matches!(
            Amount::parse("10,50"),
            Err(OutlayError::InvalidAmount)
        ));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(matches!(
            Amount::parse("NaN"),
            Err(OutlayError::InvalidAmount)
        ));
        assert!(matches!(
            Amount::parse("inf"),
            Err(OutlayError::InvalidAmount)
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Amount::new(10.5).to_string(), "₹10.50");
        assert_eq!(Amount::new(0.0).to_string(), "₹0.00");
        assert_eq!(Amount::new(-5.0).to_string(), "₹-5.00");
        assert_eq!(Amount::new(4.555).to_string(), "₹4.56");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Amount::new(12.0).format_with_symbol("₹"), "₹12.00");
        assert_eq!(Amount::new(-3.25).format_with_symbol("₹"), "₹-3.25");
    }

    #[test]
    fn test_arithmetic() {
        let a = Amount::new(10.0);
        let b = Amount::new(2.5);

        assert_eq!((a + b).value(), 12.5);
        assert_eq!((-a).value(), -10.0);

        let mut total = Amount::zero();
        total += a;
        total += b;
        assert_eq!(total.value(), 12.5);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Amount::new(1.5), Amount::new(2.5), Amount::new(-1.0)];
        let total: Amount = amounts.into_iter().sum();
        assert_eq!(total.value(), 3.0);
    }

    #[test]
    fn test_abs() {
        assert_eq!(Amount::new(-7.5).abs().value(), 7.5);
        assert_eq!(Amount::new(7.5).abs().value(), 7.5);
    }
}
