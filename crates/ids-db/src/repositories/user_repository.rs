//! Repository for canonical user records.
//!
//! Every write here is a single conditional statement. That is what makes
//! redundant delivery safe: N identical upserts produce one row whose
//! surrogate id never changes, and a replayed delete is a zero-row no-op.
//! No lock is held across the calling pipeline.
//!
//! Queries use the runtime `sqlx::query` form rather than the checked
//! macros so the workspace builds without a prepared-query cache.

use crate::{DbError, Result as DbErrorResult};

use ids_core::{NewUser, User, UserPatch};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const USER_COLUMNS: &str = "id, external_id, name, email, image, created_at, updated_at";

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Atomic insert-or-merge keyed on `external_id`.
    ///
    /// On conflict the mutable fields and `updated_at` are overwritten in
    /// place; `id` and `created_at` are preserved. The conflict target is
    /// `external_id` only: an email owned by a different external id
    /// violates the unique constraint on `email` and aborts the statement.
    pub async fn upsert_by_external_id(&self, user: &NewUser) -> DbErrorResult<User> {
        let now = Utc::now().timestamp();

        let sql = format!(
            r#"
                INSERT INTO users (external_id, name, email, image, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?, ?)
                ON CONFLICT(external_id) DO UPDATE SET
                    name = excluded.name,
                    email = excluded.email,
                    image = excluded.image,
                    updated_at = excluded.updated_at
                RETURNING {USER_COLUMNS}
            "#
        );

        let row = sqlx::query(&sql)
            .bind(&user.external_id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.image)
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        decode_user(&row)
    }

    /// Apply a sparse update where `external_id` matches. Only present patch
    /// fields are written; `updated_at` is always set. Returns `None` when
    /// no row matches; this never creates a row.
    pub async fn update_by_external_id(
        &self,
        external_id: &str,
        patch: &UserPatch,
    ) -> DbErrorResult<Option<User>> {
        let now = Utc::now().timestamp();

        let mut sql = String::from("UPDATE users SET updated_at = ?");
        if patch.name.is_some() {
            sql.push_str(", name = ?");
        }
        if patch.email.is_some() {
            sql.push_str(", email = ?");
        }
        if patch.image.is_some() {
            sql.push_str(", image = ?");
        }
        sql.push_str(&format!(" WHERE external_id = ? RETURNING {USER_COLUMNS}"));

        let mut query = sqlx::query(&sql).bind(now);
        if let Some(name) = &patch.name {
            query = query.bind(name);
        }
        if let Some(email) = &patch.email {
            query = query.bind(email);
        }
        if let Some(image) = &patch.image {
            query = query.bind(image);
        }

        let row = query
            .bind(external_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(decode_user).transpose()
    }

    /// Delete where `external_id` matches, returning the removed rows.
    /// An absent external id yields an empty vec, not an error.
    pub async fn delete_by_external_id(&self, external_id: &str) -> DbErrorResult<Vec<User>> {
        let sql = format!("DELETE FROM users WHERE external_id = ? RETURNING {USER_COLUMNS}");

        let rows = sqlx::query(&sql)
            .bind(external_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(decode_user).collect()
    }

    pub async fn find_by_external_id(&self, external_id: &str) -> DbErrorResult<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE external_id = ?");

        let row = sqlx::query(&sql)
            .bind(external_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(decode_user).transpose()
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("n")?)
    }
}

fn decode_user(row: &SqliteRow) -> DbErrorResult<User> {
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(User {
        id: row.try_get("id")?,
        external_id: row.try_get("external_id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        image: row.try_get("image")?,
        created_at: timestamp(created_at, "created_at")?,
        updated_at: timestamp(updated_at, "updated_at")?,
    })
}

#[track_caller]
fn timestamp(secs: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::Decode {
        message: format!("invalid timestamp in users.{column}: {secs}"),
        location: ErrorLocation::from(Location::caller()),
    })
}
