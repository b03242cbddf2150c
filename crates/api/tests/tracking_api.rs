//! HTTP-level integration tests for tracking events, detections, and the
//! live view.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

async fn create_customer(pool: &PgPool, tracking_id: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(
            app,
            "/api/customers",
            serde_json::json!({"trackingId": tracking_id, "gender": "Female", "ageRange": "25-34"}),
        )
        .await,
    )
    .await;
    json["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Tracking events
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_and_list_events(pool: PgPool) {
    let customer_id = create_customer(&pool, "TRACK-1").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/tracking/events",
        serde_json::json!({
            "customerId": customer_id,
            "action": "Browsing",
            "confidence": 96.5,
            "metadata": "{\"x\":55,\"y\":30}"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/tracking/events?limit=10").await).await;
    let events = json.as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["action"], "Browsing");
    assert_eq!(events[0]["confidence"], 96.5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn out_of_range_confidence_returns_400(pool: PgPool) {
    let customer_id = create_customer(&pool, "TRACK-2").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/tracking/events",
        serde_json::json!({
            "customerId": customer_id,
            "action": "Walking",
            "confidence": 150.0
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid event data");
}

// ---------------------------------------------------------------------------
// Detections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn detection_creates_customer_and_opens_visit(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/tracking/detections",
        serde_json::json!({"trackingId": "CAM-1", "gender": "Male", "ageRange": "18-24"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["visitOpened"], true);
    assert_eq!(json["customer"]["trackingId"], "CAM-1");

    // A second detection while the visit is open refreshes, not duplicates.
    let app = common::build_test_app(pool.clone());
    let json = body_json(
        post_json(
            app,
            "/api/tracking/detections",
            serde_json::json!({"trackingId": "CAM-1"}),
        )
        .await,
    )
    .await;
    assert_eq!(json["visitOpened"], false);
    assert_eq!(json["customer"]["totalVisits"], 1);

    let app = common::build_test_app(pool);
    let customers = body_json(get(app, "/api/customers").await).await;
    assert_eq!(customers.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Live view
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn live_view_caps_at_ten_and_joins_demographics(pool: PgPool) {
    // Twelve active visitors via the detection endpoint.
    for i in 0..12 {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/tracking/detections",
            serde_json::json!({"trackingId": format!("CAM-{i}"), "gender": "Female", "ageRange": "25-34"}),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/tracking/live").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let live = json.as_array().unwrap();
    assert_eq!(live.len(), 10);
    for visitor in live {
        assert!(visitor["id"].as_str().unwrap().starts_with("CAM-"));
        assert_eq!(visitor["gender"], "Female");
        assert_eq!(visitor["ageRange"], "25-34");
        assert_eq!(visitor["isStaff"], false);
        assert!(visitor["entryTime"].is_string());
    }
}
