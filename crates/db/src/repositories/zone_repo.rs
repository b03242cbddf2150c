//! Repository for the `zones` table.

use footfall_core::types::DbId;
use sqlx::PgPool;

use crate::models::zone::{CreateZone, Zone};

/// Column list for `zones` queries.
const COLUMNS: &str = "id, name, type, capacity, created_at";

/// Provides read and create operations for monitored zones. Zones are
/// immutable after creation.
pub struct ZoneRepo;

impl ZoneRepo {
    /// List all zones in creation order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Zone>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM zones ORDER BY id");
        sqlx::query_as::<_, Zone>(&query).fetch_all(pool).await
    }

    /// Find a zone by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Zone>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM zones WHERE id = $1");
        sqlx::query_as::<_, Zone>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a zone. A missing capacity falls back to 50.
    pub async fn create(pool: &PgPool, input: &CreateZone) -> Result<Zone, sqlx::Error> {
        let query = format!(
            "INSERT INTO zones (name, type, capacity) \
             VALUES ($1, $2, COALESCE($3, 50)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Zone>(&query)
            .bind(&input.name)
            .bind(&input.zone_type)
            .bind(input.capacity)
            .fetch_one(pool)
            .await
    }
}
