use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical user record: this system's deduplicated representation of a
/// person. At most one row per `external_id`, at most one per `email`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    /// Stable identity-provider id. Rows written by the sync pipeline always
    /// carry one; rows from other application flows may not.
    pub external_id: Option<String>,
    pub name: String,
    pub email: String,
    pub image: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values for the atomic insert-or-merge keyed on `external_id`.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub external_id: String,
    pub name: String,
    pub email: String,
    pub image: String,
}

/// Sparse update set: only present fields are written.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.image.is_none()
    }
}
