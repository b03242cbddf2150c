//! Repository for the `alerts` table.

use footfall_core::kinds::AlertStatus;
use footfall_core::types::DbId;
use sqlx::PgPool;

use crate::models::alert::{Alert, CreateAlert};

/// Column list for `alerts` queries.
const COLUMNS: &str = "id, type, title, message, location, status, created_at, resolved_at";

/// Provides create, list, and resolve operations for operational alerts.
pub struct AlertRepo;

impl AlertRepo {
    /// List alerts newest first, optionally filtered by status.
    pub async fn list(pool: &PgPool, status: Option<&str>) -> Result<Vec<Alert>, sqlx::Error> {
        let query = if status.is_some() {
            format!(
                "SELECT {COLUMNS} FROM alerts \
                 WHERE status = $1 \
                 ORDER BY created_at DESC"
            )
        } else {
            format!("SELECT {COLUMNS} FROM alerts ORDER BY created_at DESC")
        };

        let mut q = sqlx::query_as::<_, Alert>(&query);
        if let Some(status) = status {
            q = q.bind(status);
        }
        q.fetch_all(pool).await
    }

    /// Create an alert. Status defaults to `active`.
    pub async fn create(pool: &PgPool, input: &CreateAlert) -> Result<Alert, sqlx::Error> {
        let query = format!(
            "INSERT INTO alerts (type, title, message, location, status) \
             VALUES ($1, $2, $3, $4, COALESCE($5, 'active')) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(&input.alert_type)
            .bind(&input.title)
            .bind(&input.message)
            .bind(&input.location)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Resolve an alert.
    ///
    /// Idempotent: resolving an already-resolved alert keeps its original
    /// resolution timestamp, so concurrent resolves converge on the same
    /// end state. Returns `None` when no alert with this id exists.
    pub async fn resolve(pool: &PgPool, id: DbId) -> Result<Option<Alert>, sqlx::Error> {
        let query = format!(
            "UPDATE alerts \
             SET status = $2, resolved_at = COALESCE(resolved_at, now()) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Alert>(&query)
            .bind(id)
            .bind(AlertStatus::Resolved.as_str())
            .fetch_optional(pool)
            .await
    }
}
