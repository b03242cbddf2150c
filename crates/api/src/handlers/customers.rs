//! Handlers for tracked customers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use footfall_core::error::CoreError;
use footfall_core::types::DbId;
use footfall_db::models::customer::CreateCustomer;
use footfall_db::repositories::{CustomerRepo, VisitRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/customers
///
/// All customers, most recently seen first.
pub async fn list_customers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let customers = CustomerRepo::list(&state.pool)
        .await
        .map_err(AppError::query("fetch customers"))?;

    Ok(Json(customers))
}

/// POST /api/customers
pub async fn create_customer(
    State(state): State<AppState>,
    body: Result<Json<CreateCustomer>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body.map_err(|_| AppError::invalid_body("customer"))?;

    let customer = CustomerRepo::create(&state.pool, &input)
        .await
        .map_err(AppError::query("create customer"))?;

    Ok((StatusCode::CREATED, Json(customer)))
}

/// GET /api/customers/{id}/visits
///
/// Visit history for one customer, newest first. 404 for an unknown
/// customer.
pub async fn customer_visits(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await
        .map_err(AppError::query("fetch customer"))?;

    if customer.is_none() {
        return Err(CoreError::NotFound {
            entity: "customer",
            id,
        }
        .into());
    }

    let visits = VisitRepo::list_by_customer(&state.pool, id)
        .await
        .map_err(AppError::query("fetch visits"))?;

    Ok(Json(visits))
}
