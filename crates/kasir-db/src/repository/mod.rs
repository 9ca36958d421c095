//! # Repository Module
//!
//! Store repositories for Kasir POS.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  axum handler                                                          │
//! │       │                                                                 │
//! │       │  db.transactions().checkout(&items)                            │
//! │       ▼                                                                 │
//! │  TransactionRepository ──uses──► product::take_stock (same store tx)   │
//! │  ProductRepository                                                     │
//! │  ReportRepository                                                      │
//! │       │                                                                 │
//! │       │  SQL                                                            │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product Store: lookup, stock, CRUD
//! - [`TransactionRepository`](transaction::TransactionRepository) - Checkout engine + receipt lookup
//! - [`ReportRepository`](report::ReportRepository) - Daily sales report

pub mod product;
pub mod report;
pub mod transaction;
