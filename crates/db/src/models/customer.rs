//! Customer entity model and DTOs.

use footfall_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `customers` table.
///
/// A customer is one tracked individual, keyed externally by the detection
/// service's `tracking_id`. Demographic fields are nullable: the classifier
/// does not always produce them.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: DbId,
    pub tracking_id: String,
    pub gender: Option<String>,
    pub age_range: Option<String>,
    pub first_seen: Timestamp,
    pub last_seen: Timestamp,
    pub total_visits: i32,
    pub is_staff: bool,
}

/// DTO for creating a customer directly.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomer {
    pub tracking_id: String,
    pub gender: Option<String>,
    pub age_range: Option<String>,
    pub total_visits: Option<i32>,
    pub is_staff: Option<bool>,
}

/// DTO for a detection pushed by the external tracker.
///
/// Unlike [`CreateCustomer`], this upserts: an unknown tracking id creates
/// the customer, a known one just refreshes `last_seen`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    pub tracking_id: String,
    pub gender: Option<String>,
    pub age_range: Option<String>,
    pub is_staff: Option<bool>,
}
