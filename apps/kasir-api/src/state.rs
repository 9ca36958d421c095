//! # Application State
//!
//! Shared state for the axum application.

use kasir_db::Database;

/// Shared application state.
///
/// Holds only the store handle; the engines keep no in-process state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState { db }
    }
}
