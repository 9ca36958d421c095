//! # Seed Data Generator
//!
//! Populates the catalog with starter products for development.
//!
//! ## Usage
//! ```bash
//! # Uses DB_CONN from the environment or .env
//! cargo run -p kasir-db --bin seed
//!
//! # Explicit connection string
//! cargo run -p kasir-db --bin seed -- --db sqlite://kasir_dev.db
//! ```
//!
//! Skips seeding when the catalog already has products.

use anyhow::Context;
use kasir_core::ProductInput;
use kasir_db::{Database, DbConfig};
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

/// Starter catalog: (name, price, stock).
const STARTER_PRODUCTS: &[(&str, i64, i64)] = &[
    ("Indomie Rebus", 3500, 10),
    ("Martabak Kanji", 3000, 40),
    ("Indomie Goreng", 3800, 25),
    ("Teh Botol Sosro", 4000, 24),
    ("Kopi Susu Gula Aren", 18000, 15),
    ("Air Mineral 600ml", 3000, 48),
    ("Roti Bakar Coklat", 12000, 8),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut db_url = std::env::var("DB_CONN").ok();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                db_url = args.get(i + 1).cloned();
                i += 1;
            }
            "--help" | "-h" => {
                println!("Kasir POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <URL>     SQLite connection string (default: $DB_CONN)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            other => warn!(argument = other, "Ignoring unknown argument"),
        }
        i += 1;
    }

    let db_url = db_url
        .filter(|url| !url.trim().is_empty())
        .context("no database given: set DB_CONN or pass --db <URL>")?;

    let db = Database::new(DbConfig::new(db_url.as_str()))
        .await
        .with_context(|| format!("failed to open {db_url}"))?;

    let existing = db.products().count().await?;
    if existing > 0 {
        warn!(existing, "Catalog already has products, skipping seed");
        return Ok(());
    }

    for (name, price, stock) in STARTER_PRODUCTS {
        let product = db
            .products()
            .create(&ProductInput {
                name: (*name).to_string(),
                price: *price,
                stock: *stock,
            })
            .await
            .with_context(|| format!("failed to insert {name}"))?;

        info!(id = product.id, name = %product.name, "Seeded product");
    }

    info!(count = STARTER_PRODUCTS.len(), "Seed complete");
    db.close().await;
    Ok(())
}
