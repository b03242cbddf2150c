pub mod alerts;
pub mod analytics;
pub mod customers;
pub mod health;
pub mod stats;
pub mod tracking;
pub mod visits;
pub mod zones;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /stats/overview                 headline dashboard numbers (GET)
///
/// /analytics/demographics         age/gender distributions (GET)
/// /analytics/traffic              fixed 9-18 hourly series (GET)
///
/// /zones                          list, create (GET, POST)
/// /zones/stats                    statistics rows, ?zoneId= ?date= (GET)
///
/// /alerts                         list (?status=), create (GET, POST)
/// /alerts/{id}/resolve            one-way resolve (PATCH)
///
/// /customers                      list, create (GET, POST)
/// /customers/{id}/visits          visit history (GET)
///
/// /tracking/events                recent events (?limit=), append (GET, POST)
/// /tracking/detections            detection upsert from the tracker (POST)
/// /tracking/live                  active visits + demographics (GET)
///
/// /visits                         open a visit (POST)
/// /visits/{id}/end                close a visit (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/stats", stats::router())
        .nest("/analytics", analytics::router())
        .nest("/zones", zones::router())
        .nest("/alerts", alerts::router())
        .nest("/customers", customers::router())
        .nest("/tracking", tracking::router())
        .nest("/visits", visits::router())
}
