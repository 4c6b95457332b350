use ids_server::{AppState, build_router};

use axum_test::TestServer;
use googletest::prelude::*;
use serde_json::{Value, json};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

async fn test_server() -> TestServer {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    // In-memory needs a single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    ids_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    TestServer::new(build_router(AppState { pool })).expect("Failed to start test server")
}

fn create_delivery(external_id: &str, email: &str) -> Value {
    json!({
        "id": "evt_1",
        "name": "identity.create",
        "data": {
            "id": external_id,
            "first_name": "John",
            "last_name": "Doe",
            "email_addresses": [{"email_address": email}]
        }
    })
}

#[tokio::test]
async fn given_valid_create_delivery_then_200_with_outcome() {
    let server = test_server().await;

    let response = server
        .post("/api/events/identity")
        .json(&create_delivery("u1", "a@x.com"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_that!(body["success"].as_bool(), some(eq(true)));
    assert_that!(body["externalId"].as_str(), some(eq("u1")));
}

#[tokio::test]
async fn given_redelivered_create_then_same_user_id_both_times() {
    let server = test_server().await;
    let delivery = create_delivery("u1", "a@x.com");

    let first: Value = server.post("/api/events/identity").json(&delivery).await.json();
    let second: Value = server.post("/api/events/identity").json(&delivery).await.json();

    assert_that!(first["id"].as_i64(), some(eq(second["id"].as_i64().unwrap())));
}

#[tokio::test]
async fn given_malformed_payload_then_400_with_validation_body() {
    let server = test_server().await;

    let response = server
        .post("/api/events/identity")
        .json(&json!({
            "name": "identity.create",
            "data": {"id": "u1", "email_addresses": []}
        }))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_that!(
        body["error"]["code"].as_str(),
        some(eq("VALIDATION_ERROR"))
    );
    assert_that!(
        body["error"]["field"].as_str(),
        some(eq("email_addresses"))
    );
}

#[tokio::test]
async fn given_unknown_event_kind_then_400() {
    let server = test_server().await;

    let response = server
        .post("/api/events/identity")
        .json(&json!({"name": "identity.merge", "data": {"id": "u1"}}))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_that!(body["error"]["code"].as_str(), some(eq("BAD_REQUEST")));
}

#[tokio::test]
async fn given_update_for_unknown_identity_then_200_not_found_outcome() {
    // The transport must read this as final success, not a retry signal
    let server = test_server().await;

    let response = server
        .post("/api/events/identity")
        .json(&json!({
            "name": "identity.update",
            "data": {"id": "ghost", "first_name": "Jane"}
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_that!(body["success"].as_bool(), some(eq(false)));
    assert_that!(body["reason"].as_str(), some(eq("not_found")));
}

#[tokio::test]
async fn given_delete_delivery_then_idempotent_outcomes() {
    let server = test_server().await;
    server
        .post("/api/events/identity")
        .json(&create_delivery("u1", "a@x.com"))
        .await
        .assert_status_ok();

    let delete = json!({"name": "identity.delete", "data": {"id": "u1"}});

    let first: Value = server.post("/api/events/identity").json(&delete).await.json();
    let second: Value = server.post("/api/events/identity").json(&delete).await.json();

    assert_that!(first["deleted"].as_bool(), some(eq(true)));
    assert_that!(first["rows"].as_u64(), some(eq(1)));
    assert_that!(second["deleted"].as_bool(), some(eq(false)));
    assert_that!(second["rows"].as_u64(), some(eq(0)));
}

#[tokio::test]
async fn given_probe_routes_then_all_respond() {
    let server = test_server().await;

    server.get("/").await.assert_status_ok();
    server.get("/health").await.assert_status_ok();
    server.get("/live").await.assert_status_ok();
    server.get("/ready").await.assert_status_ok();
}
