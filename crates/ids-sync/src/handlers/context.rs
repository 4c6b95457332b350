use ids_db::UserRepository;

use sqlx::SqlitePool;

/// Dependencies handed to every handler. Passed explicitly so the pipeline
/// is testable without a live network or a shared global client.
#[derive(Clone)]
pub struct SyncContext {
    /// Database connection pool
    pub pool: SqlitePool,
}

impl SyncContext {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }
}
