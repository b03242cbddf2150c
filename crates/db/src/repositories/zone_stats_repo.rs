//! Repository for the `zone_stats` table.

use chrono::NaiveDate;
use footfall_core::types::DbId;
use sqlx::PgPool;

use crate::models::zone_stats::{CreateZoneStats, ZoneStats};

/// Column list for `zone_stats` queries.
const COLUMNS: &str = "id, zone_id, date, hour, visitor_count, avg_dwell_time";

/// Provides append and filtered reads over pre-aggregated zone statistics.
pub struct ZoneStatsRepo;

impl ZoneStatsRepo {
    /// List statistics rows, optionally narrowed to one zone and/or one
    /// calendar day.
    ///
    /// The predicate list is composed up front; bind positions follow the
    /// order conditions were pushed.
    pub async fn list(
        pool: &PgPool,
        zone_id: Option<DbId>,
        date: Option<NaiveDate>,
    ) -> Result<Vec<ZoneStats>, sqlx::Error> {
        let mut conditions: Vec<String> = Vec::new();
        let mut bind_idx: u32 = 1;

        if zone_id.is_some() {
            conditions.push(format!("zone_id = ${bind_idx}"));
            bind_idx += 1;
        }
        if date.is_some() {
            conditions.push(format!("date::date = ${bind_idx}"));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT {COLUMNS} FROM zone_stats \
             {where_clause} \
             ORDER BY zone_id, date, hour"
        );

        let mut q = sqlx::query_as::<_, ZoneStats>(&query);
        if let Some(zone_id) = zone_id {
            q = q.bind(zone_id);
        }
        if let Some(date) = date {
            q = q.bind(date);
        }
        q.fetch_all(pool).await
    }

    /// Append a statistics bucket. Date defaults to now.
    pub async fn create(pool: &PgPool, input: &CreateZoneStats) -> Result<ZoneStats, sqlx::Error> {
        let query = format!(
            "INSERT INTO zone_stats (zone_id, date, hour, visitor_count, avg_dwell_time) \
             VALUES ($1, COALESCE($2, now()), $3, COALESCE($4, 0), COALESCE($5, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ZoneStats>(&query)
            .bind(input.zone_id)
            .bind(input.date)
            .bind(input.hour)
            .bind(input.visitor_count)
            .bind(input.avg_dwell_time)
            .fetch_one(pool)
            .await
    }
}
