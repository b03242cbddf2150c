//! HTTP-level integration tests for the alert lifecycle.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, patch, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_alert_returns_201_and_defaults_to_active(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/alerts",
        serde_json::json!({
            "type": "warning",
            "title": "Long Queue Detected",
            "message": "Checkout line waiting time > 5 minutes.",
            "location": "Zone C - Checkout"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["type"], "warning");
    assert_eq!(json["status"], "active");
    assert!(json["resolvedAt"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_alert_body_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    // Missing "message".
    let response = post_json(
        app,
        "/api/alerts",
        serde_json::json!({"type": "info", "title": "Half an alert"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid alert data");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn resolved_alert_moves_between_status_filters(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/alerts",
            serde_json::json!({
                "type": "critical",
                "title": "Crowd Density Limit Exceeded",
                "message": "Zone over capacity."
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = patch(app, &format!("/api/alerts/{id}/resolve")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    // Gone from the active list...
    let app = common::build_test_app(pool.clone());
    let active = body_json(get(app, "/api/alerts?status=active").await).await;
    assert_eq!(active.as_array().unwrap().len(), 0);

    // ...and present in the resolved list with a resolution timestamp.
    let app = common::build_test_app(pool);
    let resolved = body_json(get(app, "/api/alerts?status=resolved").await).await;
    let resolved = resolved.as_array().unwrap();
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0]["id"], id);
    assert!(!resolved[0]["resolvedAt"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn resolving_twice_is_idempotent(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/alerts",
            serde_json::json!({
                "type": "info",
                "title": "Door left open",
                "message": "Rear door open for 10 minutes."
            }),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    patch(app, &format!("/api/alerts/{id}/resolve")).await;

    let app = common::build_test_app(pool.clone());
    let first = body_json(get(app, "/api/alerts?status=resolved").await).await;
    let first_resolved_at = first[0]["resolvedAt"].clone();

    let app = common::build_test_app(pool.clone());
    let response = patch(app, &format!("/api/alerts/{id}/resolve")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let second = body_json(get(app, "/api/alerts?status=resolved").await).await;
    assert_eq!(second[0]["resolvedAt"], first_resolved_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn resolving_unknown_alert_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = patch(app, "/api/alerts/999999/resolve").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
