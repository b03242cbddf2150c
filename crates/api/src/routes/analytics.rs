//! Route definitions for the analytics aggregation views.

use axum::routing::get;
use axum::Router;

use crate::handlers::analytics;
use crate::state::AppState;

/// Routes mounted at `/analytics`.
///
/// ```text
/// GET  /demographics  -> demographics
/// GET  /traffic       -> hourly_traffic
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/demographics", get(analytics::demographics))
        .route("/traffic", get(analytics::hourly_traffic))
}
