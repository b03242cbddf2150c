//! Wire types for the entity endpoints.
//!
//! The analytics views (overview, demographics, traffic, live visitors)
//! are shared with the server via `footfall_core::views`; the entity
//! shapes below mirror the server's JSON without pulling its sqlx models
//! into the client.

use footfall_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};

/// A monitored zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub zone_type: String,
    pub capacity: i32,
    pub created_at: Timestamp,
}

/// A tracked customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
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

/// One visit by a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: DbId,
    pub customer_id: DbId,
    pub entry_time: Timestamp,
    pub exit_time: Option<Timestamp>,
    pub total_dwell_time: Option<i32>,
}

/// One tracking event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub id: DbId,
    pub customer_id: DbId,
    pub zone_id: Option<DbId>,
    pub action: String,
    pub timestamp: Timestamp,
    pub confidence: Option<f64>,
    pub metadata: Option<String>,
}

/// An operational alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: DbId,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub title: String,
    pub message: String,
    pub location: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
}

/// One pre-aggregated zone statistics bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStats {
    pub id: DbId,
    pub zone_id: DbId,
    pub date: Timestamp,
    pub hour: i32,
    pub visitor_count: i32,
    pub avg_dwell_time: i32,
}

/// Request body for creating a zone.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewZone {
    pub name: String,
    #[serde(rename = "type")]
    pub zone_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,
}

/// Request body for creating a customer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub tracking_id: String,
    pub gender: Option<String>,
    pub age_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_visits: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
}

/// Request body for creating an alert.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    #[serde(rename = "type")]
    pub alert_type: String,
    pub title: String,
    pub message: String,
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Request body for appending a tracking event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTrackingEvent {
    pub customer_id: DbId,
    pub zone_id: Option<DbId>,
    pub action: String,
    pub confidence: Option<f64>,
    pub metadata: Option<String>,
}

/// Request body for opening a visit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVisit {
    pub customer_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_dwell_time: Option<i32>,
}

/// Request body for closing a visit.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndVisit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exit_time: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_dwell_time: Option<i32>,
}

/// Request body for pushing a detection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDetection {
    pub tracking_id: String,
    pub gender: Option<String>,
    pub age_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
}

/// Response to a detection push.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionOutcome {
    pub customer: Customer,
    pub visit_opened: bool,
}

/// Response to an alert resolve.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolveOutcome {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_round_trips_the_type_field() {
        let json = r#"{
            "id": 7,
            "type": "critical",
            "title": "Crowd Density Limit Exceeded",
            "message": "Zone over capacity.",
            "location": "Zone A",
            "status": "active",
            "createdAt": "2025-06-01T12:00:00Z",
            "resolvedAt": null
        }"#;
        let alert: Alert = serde_json::from_str(json).unwrap();
        assert_eq!(alert.alert_type, "critical");
        assert!(alert.resolved_at.is_none());
    }

    #[test]
    fn new_zone_omits_missing_capacity() {
        let body = serde_json::to_value(NewZone {
            name: "Main Entrance".into(),
            zone_type: "entrance".into(),
            capacity: None,
        })
        .unwrap();
        assert_eq!(body["type"], "entrance");
        assert!(body.get("capacity").is_none());
    }
}
