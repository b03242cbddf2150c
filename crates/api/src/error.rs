use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use footfall_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and carries failed database
/// queries with the action being attempted, so the client sees a stable
/// generic message ("Failed to fetch zones") while the real cause lands
/// in the logs. Implements [`IntoResponse`] to produce consistent JSON
/// error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `footfall-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx, tagged with the action that failed.
    #[error("Failed to {action}")]
    Query {
        action: &'static str,
        source: sqlx::Error,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Map a sqlx error into [`AppError::Query`] for the given action,
    /// e.g. `.map_err(AppError::query("fetch zones"))`.
    pub fn query(action: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Query { action, source }
    }

    /// The fixed 400 produced by a malformed request body.
    pub fn invalid_body(entity: &'static str) -> AppError {
        AppError::Core(CoreError::Validation(format!("Invalid {entity} data")))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal error occurred".to_string(),
                    )
                }
            },

            AppError::Query { action, source } => {
                tracing::error!(error = %source, action, "Database query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to {action}"),
                )
            }
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
