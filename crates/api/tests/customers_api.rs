//! HTTP-level integration tests for customer endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_customer_returns_201_with_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/customers",
        serde_json::json!({"trackingId": "TRACK-1", "gender": "Male", "ageRange": "35-44"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["trackingId"], "TRACK-1");
    assert_eq!(json["totalVisits"], 1);
    assert_eq!(json["isStaff"], false);
    assert!(json["firstSeen"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_customer_body_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    // trackingId is required.
    let response = post_json(
        app,
        "/api/customers",
        serde_json::json!({"gender": "Female"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Invalid customer data");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn customers_list_most_recently_seen_first(pool: PgPool) {
    for id in ["TRACK-OLD", "TRACK-NEW"] {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/customers",
            serde_json::json!({"trackingId": id}),
        )
        .await;
    }

    // Touch the first customer so it becomes the most recently seen.
    sqlx::query("UPDATE customers SET last_seen = now() + interval '1 hour' WHERE tracking_id = 'TRACK-OLD'")
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/customers").await).await;
    let customers = json.as_array().unwrap();

    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0]["trackingId"], "TRACK-OLD");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn customer_visit_history(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let customer = body_json(
        post_json(
            app,
            "/api/customers",
            serde_json::json!({"trackingId": "TRACK-2"}),
        )
        .await,
    )
    .await;
    let id = customer["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/visits", serde_json::json!({"customerId": id})).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/customers/{id}/visits")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let visits = json.as_array().unwrap();
    assert_eq!(visits.len(), 1);
    assert_eq!(visits[0]["customerId"], id);
    assert!(visits[0]["exitTime"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn visit_history_for_unknown_customer_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/customers/999999/visits").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
