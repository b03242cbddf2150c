//! Route definitions for monitored zones.

use axum::routing::get;
use axum::Router;

use crate::handlers::zones;
use crate::state::AppState;

/// Routes mounted at `/zones`.
///
/// ```text
/// GET   /        -> list_zones
/// POST  /        -> create_zone
/// GET   /stats   -> zone_stats (?zoneId= ?date=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(zones::list_zones).post(zones::create_zone))
        .route("/stats", get(zones::zone_stats))
}
