//! # Product Repository
//!
//! The Product Store: catalog records and their stock on hand.
//!
//! ## Key Operations
//! - Lookup by id
//! - Guarded stock decrement
//! - Admin CRUD (list, create, update, delete, count)
//!
//! ## Guarded Decrement
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UPDATE products SET stock = stock - q                                 │
//! │  WHERE id = ? AND stock >= q                                           │
//! │  RETURNING ...                                                          │
//! │       │                                                                 │
//! │       ├── row returned  → sold, stock already reduced                  │
//! │       │                                                                 │
//! │       └── no row        → re-read the product on the SAME connection   │
//! │                              ├── absent        → NotFound               │
//! │                              └── stock < q     → InsufficientStock      │
//! │                                                                         │
//! │  Check and write are one statement, so two checkouts can never both    │
//! │  pass the check on a stale read.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::{Executor, Sqlite, SqliteConnection, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use kasir_core::validation::{validate_product_input, validate_quantity};
use kasir_core::{Product, ProductInput};

// =============================================================================
// Shared Helpers
// =============================================================================

/// Reads one product through any executor (pool or open store transaction).
pub(crate) async fn fetch_product<'e, E>(executor: E, id: i64) -> DbResult<Option<Product>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, price, stock FROM products WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;

    Ok(product)
}

/// Removes `quantity` units of product `id` and returns the product with its
/// reduced stock.
///
/// Runs on the caller's connection so the checkout engine can use it inside
/// its store transaction.
pub(crate) async fn take_stock(
    conn: &mut SqliteConnection,
    id: i64,
    quantity: i64,
) -> DbResult<Product> {
    let sold = sqlx::query_as::<_, Product>(
        r#"
        UPDATE products
        SET stock = stock - ?2
        WHERE id = ?1 AND stock >= ?2
        RETURNING id, name, price, stock
        "#,
    )
    .bind(id)
    .bind(quantity)
    .fetch_optional(&mut *conn)
    .await?;

    if let Some(product) = sold {
        return Ok(product);
    }

    match fetch_product(&mut *conn, id).await? {
        None => Err(DbError::not_found("Product", id)),
        Some(product) => {
            product.ensure_available(quantity)?;
            // The guard only fails on missing rows or short stock.
            Err(DbError::Internal(format!(
                "stock update for product {id} matched no row"
            )))
        }
    }
}

// =============================================================================
// Product Repository
// =============================================================================

/// Repository for product store operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let product = repo.get_by_id(1).await?;
/// repo.decrement_stock(1, 3).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Gets a product by its ID. Fails with `NotFound` when absent.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Product> {
        debug!(id = id, "Getting product by ID");

        fetch_product(&self.pool, id)
            .await?
            .ok_or_else(|| DbError::not_found("Product", id))
    }

    /// Decrements stock outside of a checkout.
    ///
    /// ## Errors
    /// - `NotFound` when the product does not exist
    /// - `InsufficientStock` when `quantity` exceeds stock (stock untouched)
    /// - `InvalidInput` when `quantity <= 0`
    pub async fn decrement_stock(&self, id: i64, quantity: i64) -> DbResult<Product> {
        debug!(id = id, quantity = quantity, "Decrementing stock");

        validate_quantity(quantity)?;

        let mut conn = self.pool.acquire().await?;
        take_stock(&mut conn, id, quantity).await
    }

    /// Lists all products ordered by id.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, stock FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Creates a product and returns it with its assigned id.
    pub async fn create(&self, input: &ProductInput) -> DbResult<Product> {
        validate_product_input(input)?;

        debug!(name = %input.name, price = input.price, stock = input.stock, "Creating product");

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, stock)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, price, stock
            "#,
        )
        .bind(input.name.trim())
        .bind(input.price)
        .bind(input.stock)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    /// Replaces name, price and stock of an existing product.
    pub async fn update(&self, id: i64, input: &ProductInput) -> DbResult<Product> {
        validate_product_input(input)?;

        debug!(id = id, "Updating product");

        sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET name = ?2, price = ?3, stock = ?4
            WHERE id = ?1
            RETURNING id, name, price, stock
            "#,
        )
        .bind(id)
        .bind(input.name.trim())
        .bind(input.price)
        .bind(input.stock)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Product", id))
    }

    /// Deletes a product. Past transaction details keep their snapshot.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id = id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        Ok(())
    }

    /// Counts all products.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
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
    use kasir_core::CoreError;

    async fn setup() -> ProductRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.products()
    }

    fn input(name: &str, price: i64, stock: i64) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            price,
            stock,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = setup().await;

        let created = repo.create(&input("  Indomie Rebus ", 3500, 10)).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.name, "Indomie Rebus");

        let fetched = repo.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let repo = setup().await;
        let err = repo.get_by_id(99).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let repo = setup().await;

        let err = repo.create(&input("", 3500, 10)).await.unwrap_err();
        assert!(matches!(err, DbError::Core(CoreError::Validation(_))));

        let err = repo.create(&input("Teh", -1, 10)).await.unwrap_err();
        assert!(matches!(err, DbError::Core(CoreError::Validation(_))));

        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id() {
        let repo = setup().await;
        let a = repo.create(&input("Indomie Rebus", 3500, 10)).await.unwrap();
        let b = repo.create(&input("Martabak Kanji", 3000, 40)).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all, vec![a, b]);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let repo = setup().await;
        let p = repo.create(&input("Indomie Rebus", 3500, 10)).await.unwrap();

        let updated = repo
            .update(p.id, &input("Indomie Goreng", 3800, 12))
            .await
            .unwrap();
        assert_eq!(updated.id, p.id);
        assert_eq!(updated.name, "Indomie Goreng");
        assert_eq!(updated.price, 3800);
        assert_eq!(updated.stock, 12);

        repo.delete(p.id).await.unwrap();
        assert!(repo.delete(p.id).await.unwrap_err().is_not_found());
        assert!(repo
            .update(p.id, &input("Gone", 1, 1))
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test]
    async fn test_decrement_stock() {
        let repo = setup().await;
        let p = repo.create(&input("Martabak Kanji", 3000, 40)).await.unwrap();

        let after = repo.decrement_stock(p.id, 15).await.unwrap();
        assert_eq!(after.stock, 25);

        // Exact stock is allowed and lands on zero.
        let after = repo.decrement_stock(p.id, 25).await.unwrap();
        assert_eq!(after.stock, 0);
    }

    #[tokio::test]
    async fn test_decrement_stock_rejections_leave_stock() {
        let repo = setup().await;
        let p = repo.create(&input("Indomie Rebus", 3500, 10)).await.unwrap();

        let err = repo.decrement_stock(p.id, 11).await.unwrap_err();
        match err {
            DbError::Core(CoreError::InsufficientStock {
                product_id,
                requested,
                available,
            }) => {
                assert_eq!(product_id, p.id);
                assert_eq!(requested, 11);
                assert_eq!(available, 10);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(repo.decrement_stock(99, 1).await.unwrap_err().is_not_found());
        assert!(matches!(
            repo.decrement_stock(p.id, 0).await.unwrap_err(),
            DbError::Core(CoreError::Validation(_))
        ));

        assert_eq!(repo.get_by_id(p.id).await.unwrap().stock, 10);
    }
}
