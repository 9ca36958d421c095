//! # Request Handlers
//!
//! Each handler extracts, calls one repository, and returns JSON.
//! Extractor rejections are taken as `Result` so they surface in the
//! common `{code, message}` error body.

pub mod checkout;
pub mod product;
pub mod report;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
}

/// Health check endpoint
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    if state.db.health_check().await {
        (
            StatusCode::OK,
            Json(HealthResponse {
                status: "OK",
                database: "connected",
            }),
        )
    } else {
        tracing::error!("Health check could not reach the database");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "DEGRADED",
                database: "unreachable",
            }),
        )
    }
}
