//! Handler for the dashboard overview cards.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use footfall_db::repositories::AnalyticsRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/stats/overview
///
/// Returns total visitors, current occupancy, average dwell time, and
/// today's visit count.
pub async fn overview(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = AnalyticsRepo::overview(&state.pool)
        .await
        .map_err(AppError::query("fetch overview stats"))?;

    Ok(Json(stats))
}
