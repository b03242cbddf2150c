//! Route definitions for visit open/close.

use axum::routing::{patch, post};
use axum::Router;

use crate::handlers::visits;
use crate::state::AppState;

/// Routes mounted at `/visits`.
///
/// ```text
/// POST   /          -> create_visit
/// PATCH  /{id}/end  -> end_visit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(visits::create_visit))
        .route("/{id}/end", patch(visits::end_visit))
}
