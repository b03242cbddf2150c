//! Route definitions for tracking events, detections, and the live view.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::tracking;
use crate::state::AppState;

/// Routes mounted at `/tracking`.
///
/// ```text
/// GET   /events      -> recent_events (?limit=)
/// POST  /events      -> create_event
/// POST  /detections  -> record_detection
/// GET   /live        -> live_visitors
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/events",
            get(tracking::recent_events).post(tracking::create_event),
        )
        .route("/detections", post(tracking::record_detection))
        .route("/live", get(tracking::live_visitors))
}
