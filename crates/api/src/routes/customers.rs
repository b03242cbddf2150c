//! Route definitions for tracked customers.

use axum::routing::get;
use axum::Router;

use crate::handlers::customers;
use crate::state::AppState;

/// Routes mounted at `/customers`.
///
/// ```text
/// GET   /              -> list_customers
/// POST  /              -> create_customer
/// GET   /{id}/visits   -> customer_visits
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route("/{id}/visits", get(customers::customer_visits))
}
