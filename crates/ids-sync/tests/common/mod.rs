use ids_sync::{IdentityEvent, SyncContext};

use serde_json::{Value, json};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates a context over an in-memory SQLite pool with migrations run
pub async fn create_test_context() -> SyncContext {
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

    SyncContext::new(pool)
}

pub fn event(name: &str, data: Value) -> IdentityEvent {
    IdentityEvent {
        id: "evt_test".to_string(),
        name: name.to_string(),
        data,
    }
}

pub fn create_data(external_id: &str, email: &str) -> Value {
    json!({
        "id": external_id,
        "first_name": "John",
        "last_name": "Doe",
        "email_addresses": [{"email_address": email}]
    })
}
