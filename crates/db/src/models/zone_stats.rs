//! Zone statistics entity model and DTOs.

use footfall_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `zone_stats` table: one pre-aggregated bucket per zone
/// per hour. Append-only.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStats {
    pub id: DbId,
    pub zone_id: DbId,
    pub date: Timestamp,
    /// Hour-of-day bucket, 0-23.
    pub hour: i32,
    pub visitor_count: i32,
    /// Average dwell in whole seconds for this bucket.
    pub avg_dwell_time: i32,
}

/// DTO for appending a zone statistics bucket.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateZoneStats {
    pub zone_id: DbId,
    pub date: Option<Timestamp>,
    pub hour: i32,
    pub visitor_count: Option<i32>,
    pub avg_dwell_time: Option<i32>,
}
