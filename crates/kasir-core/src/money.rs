//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Prices are stored in the smallest currency unit as integers.          │
//! │                                                                         │
//! │    Indomie Rebus: 3500                                                  │
//! │    3 × 3500 = 10500  (exact, no rounding anywhere)                      │
//! │                                                                         │
//! │  Checkout arithmetic is CHECKED: a line or total that would overflow   │
//! │  i64 is rejected instead of silently wrapping.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kasir_core::money::Money;
//!
//! let price = Money::from_minor(3500);
//! let line = price.checked_multiply_quantity(3).unwrap();
//! let total = Money::zero().checked_add(line).unwrap();
//! assert_eq!(total.amount(), 10500);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// Serializes transparently as a bare integer so JSON bodies keep the
/// `price`, `subtotal` and `total_amount` fields as plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from the smallest currency unit.
    #[inline]
    pub const fn from_minor(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the value in the smallest currency unit.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Multiplies a unit price by a quantity, returning `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(3000);
    /// assert_eq!(unit_price.checked_multiply_quantity(4).unwrap().amount(), 12000);
    /// assert!(Money::from_minor(i64::MAX).checked_multiply_quantity(2).is_none());
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    /// Adds two amounts, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the raw amount; formatting for receipts is a client concern.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(3500);
        assert_eq!(money.amount(), 3500);
        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_checked_multiply_quantity() {
        let price = Money::from_minor(3500);
        assert_eq!(price.checked_multiply_quantity(3), Some(Money::from_minor(10500)));
        assert_eq!(price.checked_multiply_quantity(0), Some(Money::zero()));
        assert_eq!(Money::from_minor(i64::MAX / 2 + 1).checked_multiply_quantity(2), None);
    }

    #[test]
    fn test_checked_add() {
        let a = Money::from_minor(10500);
        let b = Money::from_minor(6000);
        assert_eq!(a.checked_add(b).map(|m| m.amount()), Some(16500));
        assert_eq!(Money::from_minor(i64::MAX).checked_add(Money::from_minor(1)), None);
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&Money::from_minor(3500)).unwrap();
        assert_eq!(json, "3500");
        let back: Money = serde_json::from_str("42").unwrap();
        assert_eq!(back.amount(), 42);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_minor(10500).to_string(), "10500");
    }
}
