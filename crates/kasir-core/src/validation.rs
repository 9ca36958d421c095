//! # Validation Module
//!
//! Input validation for Kasir POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (axum)                                        │
//! │  └── JSON shape / numeric types                                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                       │
//! │  ├── checkout: non-empty, bounded, quantities > 0                      │
//! │  └── product: name present, price/stock >= 0                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── CHECK (stock >= 0), CHECK (price >= 0), NOT NULL                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::types::{CheckoutItem, ProductInput};
use crate::{MAX_CHECKOUT_ITEMS, MAX_PRODUCT_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most `MAX_PRODUCT_NAME_LEN` characters
///
/// ## Example
/// ```rust
/// use kasir_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Indomie Rebus").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a checkout quantity. Must be positive (> 0).
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
pub fn validate_price(price: i64) -> ValidationResult<()> {
    non_negative("price", price)
}

/// Validates a stock level.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    non_negative("stock", stock)
}

fn non_negative(field: &str, value: i64) -> ValidationResult<()> {
    if value < 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates a full product create/update body.
pub fn validate_product_input(input: &ProductInput) -> ValidationResult<()> {
    validate_product_name(&input.name)?;
    validate_price(input.price)?;
    validate_stock(input.stock)?;
    Ok(())
}

/// Validates a checkout request before any store access.
///
/// ## Rules
/// - At least one item
/// - At most `MAX_CHECKOUT_ITEMS` items
/// - Every quantity positive
///
/// ## User Workflow
/// ```text
/// POST /api/checkout {"items": []}
///      │
///      ▼
/// validate_checkout_items ← THIS FUNCTION
///      │
///      ├── empty?            → Required("items")
///      ├── > 100 lines?      → TooMany("items")
///      ├── quantity <= 0?    → MustBePositive("quantity")
///      │
///      └── OK → Transaction engine opens the store transaction
/// ```
pub fn validate_checkout_items(items: &[CheckoutItem]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::Required {
            field: "items".to_string(),
        });
    }

    if items.len() > MAX_CHECKOUT_ITEMS {
        return Err(ValidationError::TooMany {
            field: "items".to_string(),
            max: MAX_CHECKOUT_ITEMS,
        });
    }

    items
        .iter()
        .try_for_each(|item| validate_quantity(item.quantity))
}

// =============================================================================
// Unit Tests
// =============================================================================
