//! Tracking event entity model and DTOs.

use footfall_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the append-only `tracking_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub id: DbId,
    pub customer_id: DbId,
    pub zone_id: Option<DbId>,
    /// Action label, e.g. "Walking", "Browsing", "Standing".
    pub action: String,
    pub timestamp: Timestamp,
    /// Detection confidence, 0-100, two-decimal precision.
    pub confidence: Option<f64>,
    /// Serialized position payload from the detection service.
    pub metadata: Option<String>,
}

/// DTO for appending a tracking event.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrackingEvent {
    pub customer_id: DbId,
    pub zone_id: Option<DbId>,
    pub action: String,
    #[validate(range(min = 0.0, max = 100.0))]
    pub confidence: Option<f64>,
    pub metadata: Option<String>,
}
