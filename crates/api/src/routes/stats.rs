//! Route definitions for overview statistics.

use axum::routing::get;
use axum::Router;

use crate::handlers::stats;
use crate::state::AppState;

/// Routes mounted at `/stats`.
///
/// ```text
/// GET  /overview  -> overview
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/overview", get(stats::overview))
}
