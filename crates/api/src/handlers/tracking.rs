//! Handlers for tracking events, detection ingest, and the live panel.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use footfall_db::models::customer::{Customer, Detection};
use footfall_db::models::tracking_event::CreateTrackingEvent;
use footfall_db::repositories::{CustomerRepo, TrackingEventRepo, VisitRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Default number of recent events returned.
const DEFAULT_EVENT_LIMIT: i64 = 100;
/// Hard cap on the recent-events window.
const MAX_EVENT_LIMIT: i64 = 500;

/// Number of active visits shown on the live panel.
const LIVE_LIMIT: i64 = 10;

/// Query params for `GET /tracking/events`.
#[derive(Debug, Deserialize)]
pub struct RecentEventsQuery {
    /// Max events to return. Defaults to 100, capped at 500.
    pub limit: Option<i64>,
}

/// Response for `POST /tracking/detections`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResponse {
    pub customer: Customer,
    /// Whether this detection opened a new visit.
    pub visit_opened: bool,
}

/// GET /api/tracking/events
pub async fn recent_events(
    State(state): State<AppState>,
    Query(params): Query<RecentEventsQuery>,
) -> AppResult<impl IntoResponse> {
    let limit = params
        .limit
        .unwrap_or(DEFAULT_EVENT_LIMIT)
        .clamp(1, MAX_EVENT_LIMIT);

    let events = TrackingEventRepo::recent(&state.pool, limit)
        .await
        .map_err(AppError::query("fetch tracking events"))?;

    Ok(Json(events))
}

/// POST /api/tracking/events
pub async fn create_event(
    State(state): State<AppState>,
    body: Result<Json<CreateTrackingEvent>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body.map_err(|_| AppError::invalid_body("event"))?;
    input
        .validate()
        .map_err(|_| AppError::invalid_body("event"))?;

    let event = TrackingEventRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::query("create tracking event"))?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// POST /api/tracking/detections
///
/// Upsert from the external tracker: creates the customer and opens their
/// first visit, or refreshes an existing customer (opening a new visit
/// only when none is active).
pub async fn record_detection(
    State(state): State<AppState>,
    body: Result<Json<Detection>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body.map_err(|_| AppError::invalid_body("detection"))?;

    let (customer, visit_opened) = CustomerRepo::record_detection(&state.pool, &input)
        .await
        .map_err(AppError::query("record detection"))?;

    Ok(Json(DetectionResponse {
        customer,
        visit_opened,
    }))
}

/// GET /api/tracking/live
///
/// Up to ten active visits joined with the visitor's demographic fields.
pub async fn live_visitors(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let live = VisitRepo::active_with_customers(&state.pool, LIVE_LIMIT)
        .await
        .map_err(AppError::query("fetch live tracking data"))?;

    Ok(Json(live))
}
