//! Repository for the append-only `tracking_events` table.

use sqlx::PgPool;

use crate::models::tracking_event::{CreateTrackingEvent, TrackingEvent};

/// Column list for `tracking_events` queries.
///
/// `confidence` is NUMERIC(5,2) in the schema; cast to FLOAT8 so it maps
/// onto `f64` without pulling a decimal crate into the model.
const COLUMNS: &str =
    "id, customer_id, zone_id, action, timestamp, confidence::FLOAT8 AS confidence, metadata";

/// Provides append and recent-window reads over tracking events. Rows are
/// never updated or deleted.
pub struct TrackingEventRepo;

impl TrackingEventRepo {
    /// The `limit` most recent events, newest first.
    pub async fn recent(pool: &PgPool, limit: i64) -> Result<Vec<TrackingEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tracking_events \
             ORDER BY timestamp DESC \
             LIMIT $1"
        );
        sqlx::query_as::<_, TrackingEvent>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Append a tracking event. The event timestamp is the insert time.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTrackingEvent,
    ) -> Result<TrackingEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracking_events (customer_id, zone_id, action, confidence, metadata) \
             VALUES ($1, $2, $3, $4::NUMERIC(5,2), $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TrackingEvent>(&query)
            .bind(input.customer_id)
            .bind(input.zone_id)
            .bind(&input.action)
            .bind(input.confidence)
            .bind(&input.metadata)
            .fetch_one(pool)
            .await
    }
}
