//! Handlers for monitored zones and their pre-aggregated statistics.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;
use footfall_core::types::DbId;
use footfall_db::models::zone::CreateZone;
use footfall_db::repositories::{ZoneRepo, ZoneStatsRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query params for `GET /zones/stats`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStatsQuery {
    /// Narrow to a single zone.
    pub zone_id: Option<DbId>,
    /// Narrow to one calendar day (`YYYY-MM-DD`).
    pub date: Option<NaiveDate>,
}

/// GET /api/zones
pub async fn list_zones(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let zones = ZoneRepo::list(&state.pool)
        .await
        .map_err(AppError::query("fetch zones"))?;

    Ok(Json(zones))
}

/// POST /api/zones
///
/// Capacity defaults to 50 when omitted.
pub async fn create_zone(
    State(state): State<AppState>,
    body: Result<Json<CreateZone>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body.map_err(|_| AppError::invalid_body("zone"))?;

    let zone = ZoneRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::query("create zone"))?;

    tracing::info!(zone_id = zone.id, name = %zone.name, "Zone created");

    Ok((StatusCode::CREATED, Json(zone)))
}

/// GET /api/zones/stats
pub async fn zone_stats(
    State(state): State<AppState>,
    Query(params): Query<ZoneStatsQuery>,
) -> AppResult<impl IntoResponse> {
    let stats = ZoneStatsRepo::list(&state.pool, params.zone_id, params.date)
        .await
        .map_err(AppError::query("fetch zone stats"))?;

    Ok(Json(stats))
}
