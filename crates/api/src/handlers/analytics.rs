//! Handlers for the analytics aggregation views.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use footfall_db::repositories::AnalyticsRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/analytics/demographics
///
/// Age and gender distributions as raw counts; null demographic fields
/// appear as an "Unknown" bucket.
pub async fn demographics(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let demographics = AnalyticsRepo::demographics(&state.pool)
        .await
        .map_err(AppError::query("fetch demographics"))?;

    Ok(Json(demographics))
}

/// GET /api/analytics/traffic
///
/// Today's entries per business hour (fixed 09:00-18:00 window, exactly
/// ten slots).
pub async fn hourly_traffic(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let traffic = AnalyticsRepo::hourly_traffic(&state.pool)
        .await
        .map_err(AppError::query("fetch traffic data"))?;

    Ok(Json(traffic))
}
