//! # Domain Types
//!
//! Core domain types used throughout Kasir POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Product      │   │   Transaction   │   │  TransactionDetail  │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id             │   │  id             │◄──│  transaction_id     │   │
//! │  │  name           │   │  total_amount   │   │  product_id (weak)  │   │
//! │  │  price          │   │  created_at     │   │  product_name (snap)│   │
//! │  │  stock          │   │  details ───────┼──►│  quantity, subtotal │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  CheckoutItem   │   │  ProductInput   │   (transient request types) │
//! │  │  product_id     │   │  name           │                             │
//! │  │  quantity       │   │  price, stock   │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A detail copies the product name and prices the line at sale time, so a
//! later rename or price change never rewrites an old receipt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Store-generated identifier.
    pub id: i64,

    /// Display name shown to the cashier and on receipts.
    pub name: String,

    /// Unit price in the smallest currency unit.
    pub price: i64,

    /// Units on hand. Never negative.
    pub stock: i64,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_minor(self.price)
    }

    /// Checks if `quantity` units can be sold from current stock.
    #[inline]
    pub fn can_sell(&self, quantity: i64) -> bool {
        quantity <= self.stock
    }

    /// Fails with `InsufficientStock` when `quantity` exceeds stock.
    pub fn ensure_available(&self, quantity: i64) -> CoreResult<()> {
        if self.can_sell(quantity) {
            return Ok(());
        }

        Err(CoreError::InsufficientStock {
            product_id: self.id,
            requested: quantity,
            available: self.stock,
        })
    }

    /// Prices `quantity` units at the current unit price.
    pub fn line_subtotal(&self, quantity: i64) -> CoreResult<Money> {
        self.price()
            .checked_multiply_quantity(quantity)
            .ok_or(CoreError::AmountOverflow { product_id: self.id })
    }
}

/// Fields accepted when creating or replacing a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    pub name: String,
    pub price: i64,
    pub stock: i64,
}

// =============================================================================
// Checkout
// =============================================================================

/// One requested line of a checkout. Never persisted on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutItem {
    pub product_id: i64,
    pub quantity: i64,
}

impl CheckoutItem {
    pub fn new(product_id: i64, quantity: i64) -> Self {
        CheckoutItem {
            product_id,
            quantity,
        }
    }
}

/// Checkout request body: `{ "items": [ { "product_id", "quantity" } ] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    #[serde(default)]
    pub items: Vec<CheckoutItem>,
}

// =============================================================================
// Transaction
// =============================================================================

/// A line item in a transaction.
/// Uses snapshot pattern to freeze the product name and line price at time of sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct TransactionDetail {
    pub id: i64,
    pub transaction_id: i64,
    /// Non-owning reference; the product may since have changed or been removed.
    pub product_id: i64,
    /// Product name at time of sale (frozen).
    pub product_name: String,
    pub quantity: i64,
    /// quantity × unit price at time of sale.
    pub subtotal: i64,
}

impl TransactionDetail {
    /// Returns the subtotal as Money.
    #[inline]
    pub fn subtotal(&self) -> Money {
        Money::from_minor(self.subtotal)
    }
}

/// A persisted sale with its ordered line items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub total_amount: i64,
    pub created_at: DateTime<Utc>,
    pub details: Vec<TransactionDetail>,
}

impl Transaction {
    /// Returns the total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_minor(self.total_amount)
    }

    /// Sum of the detail subtotals, or `None` if it overflows. Equal to
    /// [`Transaction::total`] for every transaction produced by checkout.
    pub fn details_total(&self) -> Option<Money> {
        self.details
            .iter()
            .try_fold(Money::zero(), |acc, d| acc.checked_add(d.subtotal()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn indomie() -> Product {
        Product {
            id: 1,
            name: "Indomie Rebus".to_string(),
            price: 3500,
            stock: 10,
        }
    }

    #[test]
    fn test_can_sell_up_to_stock() {
        let product = indomie();
        assert!(product.can_sell(10));
        assert!(!product.can_sell(11));
    }

    #[test]
    fn test_ensure_available_reports_stock() {
        let err = indomie().ensure_available(12).unwrap_err();
        match err {
            CoreError::InsufficientStock {
                product_id,
                requested,
                available,
            } => {
                assert_eq!(product_id, 1);
                assert_eq!(requested, 12);
                assert_eq!(available, 10);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_line_subtotal() {
        assert_eq!(indomie().line_subtotal(3).unwrap().amount(), 10500);

        let pricey = Product {
            price: i64::MAX,
            ..indomie()
        };
        assert!(matches!(
            pricey.line_subtotal(2),
            Err(CoreError::AmountOverflow { product_id: 1 })
        ));
    }

    #[test]
    fn test_checkout_request_json_shape() {
        let req: CheckoutRequest =
            serde_json::from_str(r#"{"items":[{"product_id":1,"quantity":3}]}"#).unwrap();
        assert_eq!(req.items, vec![CheckoutItem::new(1, 3)]);

        let empty: CheckoutRequest = serde_json::from_str("{}").unwrap();
        assert!(empty.items.is_empty());
    }

    #[test]
    fn test_details_total() {
        let tx = Transaction {
            id: 7,
            total_amount: 16500,
            created_at: Utc::now(),
            details: vec![
                TransactionDetail {
                    id: 1,
                    transaction_id: 7,
                    product_id: 1,
                    product_name: "Indomie Rebus".to_string(),
                    quantity: 3,
                    subtotal: 10500,
                },
                TransactionDetail {
                    id: 2,
                    transaction_id: 7,
                    product_id: 2,
                    product_name: "Martabak Kanji".to_string(),
                    quantity: 2,
                    subtotal: 6000,
                },
            ],
        };
        assert_eq!(tx.details_total(), Some(tx.total()));
    }

    #[test]
    fn test_details_total_overflow_is_none() {
        let line = |id: i64| TransactionDetail {
            id,
            transaction_id: 8,
            product_id: id,
            product_name: "Emas Batangan".to_string(),
            quantity: 1,
            subtotal: i64::MAX,
        };
        let tx = Transaction {
            id: 8,
            total_amount: i64::MAX,
            created_at: Utc::now(),
            details: vec![line(1), line(2)],
        };
        assert_eq!(tx.details_total(), None);
    }
}
