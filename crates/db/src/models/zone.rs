//! Zone entity model and DTOs.

use footfall_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `zones` table. Zones are immutable after creation.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: DbId,
    pub name: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub zone_type: String,
    pub capacity: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a zone. A missing capacity falls back to the
/// database default of 50.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateZone {
    pub name: String,
    #[serde(rename = "type")]
    pub zone_type: String,
    pub capacity: Option<i32>,
}
