//! # Transaction Repository
//!
//! The checkout engine: turns a list of (product, quantity) lines into one
//! persisted sale, atomically.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  checkout([{1, 3}, {2, 2}])                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_checkout_items ── empty / > 100 / qty <= 0 → InvalidInput    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BEGIN ─────────────────────────────────────────────────────────┐      │
//! │  │ for each line, in order:                                     │      │
//! │  │   take_stock(product, qty)  → NotFound | InsufficientStock   │      │
//! │  │   subtotal = price × qty    → overflow = InvalidInput        │      │
//! │  │   total   += subtotal                                        │      │
//! │  │ INSERT transactions (total, now) → id                        │      │
//! │  │ INSERT transaction_details ... (input order)                 │      │
//! │  COMMIT ────────────────────────────────────────────────────────┘      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Transaction { id, total_amount, created_at, details }                │
//! │                                                                         │
//! │  Any error before COMMIT drops the store transaction, which rolls back │
//! │  every stock change and insert made so far.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

use super::product::take_stock;
use crate::error::{DbError, DbResult};
use kasir_core::validation::validate_checkout_items;
use kasir_core::{CheckoutItem, CoreError, Money, Transaction, TransactionDetail};

/// A priced line waiting for its transaction id.
struct PendingLine {
    product_id: i64,
    product_name: String,
    quantity: i64,
    subtotal: Money,
}

/// Repository for checkouts and stored transactions.
///
/// ## Usage
/// ```rust,ignore
/// let sale = db.transactions().checkout(&[CheckoutItem::new(1, 3)]).await?;
/// let reprint = db.transactions().get_by_id(sale.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct TransactionRepository {
    pool: SqlitePool,
}

impl TransactionRepository {
    /// Creates a new TransactionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        TransactionRepository { pool }
    }

    /// Sells the requested lines as one all-or-nothing store transaction.
    ///
    /// ## Errors
    /// - `Core(Validation)` for empty, oversized or non-positive input,
    ///   raised before the store is touched
    /// - `Core(AmountOverflow)` when a subtotal or the total overflows
    /// - `NotFound` for an unknown product id
    /// - `Core(InsufficientStock)` when a line exceeds current stock
    /// - any persistence error
    ///
    /// Checkout is not idempotent: the same input twice sells twice.
    pub async fn checkout(&self, items: &[CheckoutItem]) -> DbResult<Transaction> {
        debug!(lines = items.len(), "Checkout requested");

        validate_checkout_items(items)?;

        match self.run_checkout(items).await {
            Ok(transaction) => {
                info!(
                    transaction_id = transaction.id,
                    total_amount = transaction.total_amount,
                    lines = transaction.details.len(),
                    "Checkout completed"
                );
                Ok(transaction)
            }
            Err(err) => {
                warn!(error = %err, "Checkout rejected, store rolled back");
                Err(err)
            }
        }
    }

    async fn run_checkout(&self, items: &[CheckoutItem]) -> DbResult<Transaction> {
        let mut tx = self.pool.begin().await?;

        let mut total = Money::zero();
        let mut lines = Vec::with_capacity(items.len());

        for item in items {
            let product = take_stock(&mut *tx, item.product_id, item.quantity).await?;
            let subtotal = product.line_subtotal(item.quantity)?;
            total = total
                .checked_add(subtotal)
                .ok_or(CoreError::AmountOverflow {
                    product_id: product.id,
                })?;

            debug!(
                product_id = product.id,
                quantity = item.quantity,
                remaining = product.stock,
                "Line reserved"
            );

            lines.push(PendingLine {
                product_id: product.id,
                product_name: product.name,
                quantity: item.quantity,
                subtotal,
            });
        }

        let created_at = Utc::now();

        let transaction_id = sqlx::query(
            "INSERT INTO transactions (total_amount, created_at) VALUES (?1, ?2)",
        )
        .bind(total.amount())
        .bind(created_at)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let mut details = Vec::with_capacity(lines.len());
        for line in lines {
            let detail_id = sqlx::query(
                r#"
                INSERT INTO transaction_details
                    (transaction_id, product_id, product_name, quantity, subtotal)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(transaction_id)
            .bind(line.product_id)
            .bind(&line.product_name)
            .bind(line.quantity)
            .bind(line.subtotal.amount())
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

            details.push(TransactionDetail {
                id: detail_id,
                transaction_id,
                product_id: line.product_id,
                product_name: line.product_name,
                quantity: line.quantity,
                subtotal: line.subtotal.amount(),
            });
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(Transaction {
            id: transaction_id,
            total_amount: total.amount(),
            created_at,
            details,
        })
    }

    /// Loads a stored transaction with its details in insertion order.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Transaction>> {
        debug!(id = id, "Getting transaction by ID");

        let header: Option<(i64, i64, DateTime<Utc>)> = sqlx::query_as(
            "SELECT id, total_amount, created_at FROM transactions WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some((id, total_amount, created_at)) = header else {
            return Ok(None);
        };

        let details = sqlx::query_as::<_, TransactionDetail>(
            r#"
            SELECT id, transaction_id, product_id, product_name, quantity, subtotal
            FROM transaction_details
            WHERE transaction_id = ?1
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(Transaction {
            id,
            total_amount,
            created_at,
            details,
        }))
    }

    /// Counts stored transactions.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM transactions")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use kasir_core::ProductInput;

    async fn setup() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        for (name, price, stock) in [("Indomie Rebus", 3500, 10), ("Martabak Kanji", 3000, 40)] {
            db.products()
                .create(&ProductInput {
                    name: name.to_string(),
                    price,
                    stock,
                })
                .await
                .unwrap();
        }
        db
    }

    async fn detail_count(db: &Database) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM transaction_details")
            .fetch_one(db.pool())
            .await
            .unwrap()
    }

    async fn stock_of(db: &Database, id: i64) -> i64 {
        db.products().get_by_id(id).await.unwrap().stock
    }

    #[tokio::test]
    async fn test_single_line_checkout() {
        let db = setup().await;

        let sale = db
            .transactions()
            .checkout(&[CheckoutItem::new(1, 3)])
            .await
            .unwrap();

        assert!(sale.id > 0);
        assert_eq!(sale.total_amount, 10500);
        assert_eq!(sale.details.len(), 1);

        let line = &sale.details[0];
        assert_eq!(line.transaction_id, sale.id);
        assert_eq!(line.product_id, 1);
        assert_eq!(line.product_name, "Indomie Rebus");
        assert_eq!(line.quantity, 3);
        assert_eq!(line.subtotal, 10500);

        assert_eq!(stock_of(&db, 1).await, 7);
        assert_eq!(stock_of(&db, 2).await, 40);
    }

    #[tokio::test]
    async fn test_multi_line_total_and_order() {
        let db = setup().await;

        let sale = db
            .transactions()
            .checkout(&[CheckoutItem::new(2, 2), CheckoutItem::new(1, 1)])
            .await
            .unwrap();

        assert_eq!(sale.total_amount, 6000 + 3500);
        assert_eq!(sale.details_total(), Some(sale.total()));
        let ids: Vec<i64> = sale.details.iter().map(|d| d.product_id).collect();
        assert_eq!(ids, vec![2, 1]);

        assert_eq!(stock_of(&db, 1).await, 9);
        assert_eq!(stock_of(&db, 2).await, 38);
    }

    #[tokio::test]
    async fn test_stored_transaction_matches_returned() {
        let db = setup().await;
        let repo = db.transactions();

        let sale = repo
            .checkout(&[CheckoutItem::new(1, 2), CheckoutItem::new(2, 5)])
            .await
            .unwrap();

        let stored = repo.get_by_id(sale.id).await.unwrap().unwrap();
        assert_eq!(stored.id, sale.id);
        assert_eq!(stored.total_amount, sale.total_amount);
        assert_eq!(stored.details, sale.details);
        assert_eq!(
            stored.created_at.timestamp_micros(),
            sale.created_at.timestamp_micros()
        );

        assert!(repo.get_by_id(sale.id + 100).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_unknown_product_changes_nothing() {
        let db = setup().await;

        let err = db
            .transactions()
            .checkout(&[CheckoutItem::new(1, 2), CheckoutItem::new(99, 1)])
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Product not found: 99");
        assert_eq!(stock_of(&db, 1).await, 10);
        assert_eq!(db.transactions().count().await.unwrap(), 0);
        assert_eq!(detail_count(&db).await, 0);
    }

    #[tokio::test]
    async fn test_insufficient_stock_changes_nothing() {
        let db = setup().await;

        let err = db
            .transactions()
            .checkout(&[CheckoutItem::new(2, 5), CheckoutItem::new(1, 11)])
            .await
            .unwrap_err();

        match err {
            DbError::Core(CoreError::InsufficientStock {
                product_id,
                requested,
                available,
            }) => {
                assert_eq!(product_id, 1);
                assert_eq!(requested, 11);
                assert_eq!(available, 10);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert_eq!(stock_of(&db, 1).await, 10);
        assert_eq!(stock_of(&db, 2).await, 40);
        assert_eq!(db.transactions().count().await.unwrap(), 0);
        assert_eq!(detail_count(&db).await, 0);
    }

    #[tokio::test]
    async fn test_repeated_product_sees_earlier_line() {
        let db = setup().await;

        let err = db
            .transactions()
            .checkout(&[CheckoutItem::new(1, 6), CheckoutItem::new(1, 6)])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DbError::Core(CoreError::InsufficientStock { available: 4, .. })
        ));
        assert_eq!(stock_of(&db, 1).await, 10);

        let sale = db
            .transactions()
            .checkout(&[CheckoutItem::new(1, 4), CheckoutItem::new(1, 6)])
            .await
            .unwrap();
        assert_eq!(sale.details.len(), 2);
        assert_eq!(stock_of(&db, 1).await, 0);
    }

    #[tokio::test]
    async fn test_invalid_input_is_rejected_before_store() {
        let db = setup().await;
        let repo = db.transactions();

        for items in [vec![], vec![CheckoutItem::new(1, 0)], vec![CheckoutItem::new(1, -2)]] {
            let err = repo.checkout(&items).await.unwrap_err();
            assert!(matches!(err, DbError::Core(CoreError::Validation(_))));
        }

        // Validation runs before lookup, so an unknown id is not reported.
        let err = repo.checkout(&[CheckoutItem::new(99, 0)]).await.unwrap_err();
        assert!(matches!(err, DbError::Core(CoreError::Validation(_))));

        assert_eq!(stock_of(&db, 1).await, 10);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_amount_overflow_rolls_back() {
        let db = setup().await;
        let pricey = db
            .products()
            .create(&ProductInput {
                name: "Emas Batangan".to_string(),
                price: i64::MAX / 2,
                stock: 5,
            })
            .await
            .unwrap();

        let err = db
            .transactions()
            .checkout(&[CheckoutItem::new(pricey.id, 3)])
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Core(CoreError::AmountOverflow { .. })));

        let err = db
            .transactions()
            .checkout(&[CheckoutItem::new(pricey.id, 2), CheckoutItem::new(pricey.id, 1)])
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Core(CoreError::AmountOverflow { .. })));

        assert_eq!(stock_of(&db, pricey.id).await, 5);
        assert_eq!(db.transactions().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_same_checkout_twice_sells_twice() {
        let db = setup().await;
        let repo = db.transactions();
        let items = [CheckoutItem::new(1, 2)];

        let first = repo.checkout(&items).await.unwrap();
        let second = repo.checkout(&items).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(stock_of(&db, 1).await, 6);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_details_survive_product_delete() {
        let db = setup().await;
        let sale = db
            .transactions()
            .checkout(&[CheckoutItem::new(2, 1)])
            .await
            .unwrap();

        db.products().delete(2).await.unwrap();

        let stored = db.transactions().get_by_id(sale.id).await.unwrap().unwrap();
        assert_eq!(stored.details[0].product_name, "Martabak Kanji");
        assert_eq!(stored.details[0].product_id, 2);
    }
}
