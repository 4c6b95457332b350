//! Result shapes returned to the event transport. The transport reads
//! `success` to decide between completion and redelivery, so these are
//! serialized verbatim as the handler response body.

use ids_core::User;

use serde::Serialize;

/// Outcome of a processed `identity.create` event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResult {
    pub success: bool,
    pub id: i64,
    pub external_id: String,
    pub user_data: User,
}

/// Outcome of a processed `identity.update` event.
///
/// `NotFound` is a structured result, not an error: a replayed update for an
/// identity that was never created (or is already deleted) must not trigger
/// a retry storm.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum UpdateUserOutcome {
    #[serde(rename_all = "camelCase")]
    Applied {
        success: bool,
        id: i64,
        external_id: String,
        user_data: User,
    },
    #[serde(rename_all = "camelCase")]
    NotFound {
        success: bool,
        reason: &'static str,
        external_id: String,
    },
}

impl UpdateUserOutcome {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Outcome of a processed `identity.delete` event. Deleting an absent
/// external id is a success with `deleted: false`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserResult {
    pub success: bool,
    pub deleted: bool,
    pub external_id: String,
    pub rows: u64,
}
