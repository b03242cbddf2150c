//! Route definitions for operational alerts.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::alerts;
use crate::state::AppState;

/// Routes mounted at `/alerts`.
///
/// ```text
/// GET    /              -> list_alerts (?status=)
/// POST   /              -> create_alert
/// PATCH  /{id}/resolve  -> resolve_alert
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(alerts::list_alerts).post(alerts::create_alert))
        .route("/{id}/resolve", patch(alerts::resolve_alert))
}
