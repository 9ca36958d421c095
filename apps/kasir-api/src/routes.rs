//! # Routes
//!
//! Axum router configuration for the Kasir API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the main application router
///
/// Routes:
/// - GET    /health                  - Liveness + store check
/// - GET    /api/products            - List products
/// - POST   /api/products            - Create product
/// - GET    /api/products/{id}       - Get product
/// - PUT    /api/products/{id}       - Replace product
/// - DELETE /api/products/{id}       - Delete product
/// - POST   /api/checkout            - Sell items
/// - GET    /api/transactions/{id}   - Stored transaction (receipt reprint)
/// - GET    /api/report/today        - Today's sales summary
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Products
        .route(
            "/products",
            get(handlers::product::list_products).post(handlers::product::create_product),
        )
        .route(
            "/products/{id}",
            get(handlers::product::get_product)
                .put(handlers::product::update_product)
                .delete(handlers::product::delete_product),
        )
        // Sales
        .route("/checkout", post(handlers::checkout::checkout))
        .route("/transactions/{id}", get(handlers::checkout::get_transaction))
        // Reports
        .route("/report/today", get(handlers::report::today_report));

    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
