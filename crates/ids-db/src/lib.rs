pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::user_repository::UserRepository;

use std::panic::Location;

use error_location::ErrorLocation;
use log::info;
use sqlx::SqlitePool;

/// Apply the embedded schema migrations to the given pool.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DbError::Migration {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!("Database migrations applied");

    Ok(())
}
