//! Visit entity model and DTOs.

use footfall_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `visits` table.
///
/// A visit is "active" while `exit_time` is null. Nothing sweeps stale
/// active visits; if the external tracker dies without closing them they
/// stay open.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: DbId,
    pub customer_id: DbId,
    pub entry_time: Timestamp,
    pub exit_time: Option<Timestamp>,
    /// Dwell duration in whole seconds, set when the visit closes.
    pub total_dwell_time: Option<i32>,
}

/// DTO for opening a visit. Entry time defaults to now; a pre-closed visit
/// (exit time and dwell supplied up front) is allowed for backfill.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVisit {
    pub customer_id: DbId,
    pub exit_time: Option<Timestamp>,
    pub total_dwell_time: Option<i32>,
}

/// DTO for closing a visit.
///
/// Exit time defaults to now; dwell defaults to the whole seconds between
/// entry and exit.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseVisit {
    pub exit_time: Option<Timestamp>,
    pub total_dwell_time: Option<i32>,
}
