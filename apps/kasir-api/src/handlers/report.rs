//! Sales report endpoint.

use axum::extract::State;
use axum::Json;
use kasir_core::DailyReport;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/report/today
pub async fn today_report(State(state): State<AppState>) -> ApiResult<Json<DailyReport>> {
    Ok(Json(state.db.reports().today_report().await?))
}
