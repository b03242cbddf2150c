//! Handlers for visit open/close.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use footfall_core::error::CoreError;
use footfall_core::types::DbId;
use footfall_db::models::visit::{CloseVisit, CreateVisit};
use footfall_db::repositories::VisitRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/visits
///
/// Opens a visit; entry time is the insert time.
pub async fn create_visit(
    State(state): State<AppState>,
    body: Result<Json<CreateVisit>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body.map_err(|_| AppError::invalid_body("visit"))?;

    let visit = VisitRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::query("create visit"))?;

    Ok((StatusCode::CREATED, Json(visit)))
}

/// PATCH /api/visits/{id}/end
///
/// Closes a visit. Exit time defaults to now; dwell defaults to the
/// whole seconds between entry and exit. 404 for an unknown visit.
pub async fn end_visit(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Result<Json<CloseVisit>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body.map_err(|_| AppError::invalid_body("visit"))?;

    let closed = VisitRepo::close(&state.pool, id, &input)
        .await
        .map_err(AppError::query("end visit"))?;

    match closed {
        Some(visit) => Ok(Json(visit)),
        None => Err(CoreError::NotFound {
            entity: "visit",
            id,
        }
        .into()),
    }
}
