//! # Report Repository
//!
//! Same-day sales summary. Read-only; nothing here is persisted.
//!
//! ## Aggregation
//! ```text
//! transactions WHERE created_at >= since
//!      │
//!      ├── SUM(total_amount), COUNT(*)        → total_revenue, total_transactions
//!      │
//!      └── JOIN transaction_details
//!          GROUP BY product_id
//!          ORDER BY SUM(quantity) DESC, product_id ASC
//!          LIMIT 1                            → top_product
//! ```

use chrono::{DateTime, Local, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use kasir_core::{start_of_day, DailyReport, TopProduct};

/// Repository for sales reports.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Summarizes every transaction since local midnight of the server clock.
    pub async fn today_report(&self) -> DbResult<DailyReport> {
        self.report_since(start_of_day(&Local::now())).await
    }

    /// Summarizes every transaction created at or after `since`.
    ///
    /// The top product's name is the current catalog name, or the most
    /// recent detail snapshot when the product has since been deleted.
    /// Equal quantities go to the lowest product id.
    pub async fn report_since(&self, since: DateTime<Utc>) -> DbResult<DailyReport> {
        debug!(since = %since, "Building sales report");

        let (total_revenue, total_transactions): (i64, i64) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(total_amount), 0), COUNT(*)
            FROM transactions
            WHERE created_at >= ?1
            "#,
        )
        .bind(since)
        .fetch_one(&self.pool)
        .await?;

        let top: Option<(i64, String, i64)> = sqlx::query_as(
            r#"
            SELECT
                td.product_id,
                COALESCE(
                    MAX(p.name),
                    (SELECT last.product_name
                     FROM transaction_details last
                     WHERE last.product_id = td.product_id
                     ORDER BY last.id DESC
                     LIMIT 1)
                ) AS name,
                SUM(td.quantity) AS quantity_sold
            FROM transaction_details td
            JOIN transactions t ON t.id = td.transaction_id
            LEFT JOIN products p ON p.id = td.product_id
            WHERE t.created_at >= ?1
            GROUP BY td.product_id
            ORDER BY quantity_sold DESC, td.product_id ASC
            LIMIT 1
            "#,
        )
        .bind(since)
        .fetch_optional(&self.pool)
        .await?;

        let top_product = top
            .map(|(_, name, quantity_sold)| TopProduct {
                name,
                quantity_sold,
            })
            .unwrap_or_default();

        debug!(
            total_revenue = total_revenue,
            total_transactions = total_transactions,
            top_product = %top_product.name,
            "Report built"
        );

        Ok(DailyReport {
            total_revenue,
            total_transactions,
            top_product,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
