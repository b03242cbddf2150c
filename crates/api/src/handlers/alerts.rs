//! Handlers for the alert lifecycle.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use footfall_core::error::CoreError;
use footfall_core::types::DbId;
use footfall_db::models::alert::CreateAlert;
use footfall_db::repositories::AlertRepo;
use serde::Deserialize;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query params for `GET /alerts`.
#[derive(Debug, Deserialize)]
pub struct AlertListQuery {
    /// Filter by lifecycle status ("active" / "resolved").
    pub status: Option<String>,
}

/// GET /api/alerts
pub async fn list_alerts(
    State(state): State<AppState>,
    Query(params): Query<AlertListQuery>,
) -> AppResult<impl IntoResponse> {
    let alerts = AlertRepo::list(&state.pool, params.status.as_deref())
        .await
        .map_err(AppError::query("fetch alerts"))?;

    Ok(Json(alerts))
}

/// POST /api/alerts
pub async fn create_alert(
    State(state): State<AppState>,
    body: Result<Json<CreateAlert>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body.map_err(|_| AppError::invalid_body("alert"))?;

    let alert = AlertRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::query("create alert"))?;

    tracing::info!(alert_id = alert.id, alert_type = %alert.alert_type, "Alert created");

    Ok((StatusCode::CREATED, Json(alert)))
}

/// PATCH /api/alerts/{id}/resolve
///
/// One-way transition; resolving an already-resolved alert is a no-op
/// that reports success.
pub async fn resolve_alert(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let resolved = AlertRepo::resolve(&state.pool, id)
        .await
        .map_err(AppError::query("resolve alert"))?;

    if resolved.is_none() {
        return Err(CoreError::NotFound {
            entity: "alert",
            id,
        }
        .into());
    }

    tracing::info!(alert_id = id, "Alert resolved");

    Ok(Json(json!({ "success": true })))
}
