//! Analytics view types shared between the API server and the client.
//!
//! These are the JSON payloads of the read-only dashboard endpoints. The
//! server serializes them, the polling client deserializes them; keeping
//! them in one place keeps the two sides from drifting.

use serde::{Deserialize, Serialize};

use crate::types::Timestamp;

/// Headline numbers for the overview cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    /// Distinct customers ever recorded.
    pub total_visitors: i64,
    /// Visits currently open (no exit timestamp).
    pub current_occupancy: i64,
    /// Mean dwell time in whole seconds across closed visits, 0 when none.
    pub avg_dwell_time: i64,
    /// Visits whose entry falls on the current calendar day.
    pub total_visits_today: i64,
}

/// One labeled count in a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionBucket {
    pub name: String,
    pub value: i64,
}

/// Customer counts bucketed by age range and by gender.
///
/// Buckets are raw counts; percentage normalization is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub age_distribution: Vec<DistributionBucket>,
    pub gender_distribution: Vec<DistributionBucket>,
}

/// One hour slot in the fixed business-hours traffic series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficSlot {
    /// Hour label, e.g. `"09:00"`.
    pub time: String,
    pub visitors: i64,
    pub entry: i64,
    pub exit: i64,
}

/// An active visit joined with the visitor's demographic fields, as shown
/// on the live tracking panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveVisitor {
    /// The customer's external tracking identifier.
    pub id: String,
    pub gender: Option<String>,
    pub age_range: Option<String>,
    pub is_staff: bool,
    pub entry_time: Timestamp,
}
