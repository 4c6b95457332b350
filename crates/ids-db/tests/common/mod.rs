use ids_core::NewUser;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
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

    pool
}

pub fn sample_user(external_id: &str, email: &str) -> NewUser {
    NewUser {
        external_id: external_id.to_string(),
        name: "John Doe".to_string(),
        email: email.to_string(),
        image: String::new(),
    }
}
