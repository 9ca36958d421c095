//! # kasir-api
//!
//! HTTP API layer for Kasir POS.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET / POST | `/api/products` | List / create products |
//! | GET / PUT / DELETE | `/api/products/{id}` | Read / replace / delete a product |
//! | POST | `/api/checkout` | Sell items, returns the stored transaction |
//! | GET | `/api/transactions/{id}` | Stored transaction |
//! | GET | `/api/report/today` | Today's revenue, count and top product |

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{AppConfig, ConfigError};
pub use error::{ApiError, ErrorCode};
pub use routes::create_router;
pub use state::AppState;
