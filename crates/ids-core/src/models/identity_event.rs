use serde::{Deserialize, Serialize};

/// One address entry from the provider's multi-valued email list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailEntry {
    pub address: String,
    pub primary: bool,
    pub verified: bool,
}

/// Payload of an `identity.create` event after validation.
///
/// The provider names the stable identifier `id` on the wire; it is renamed
/// to `external_id` at the validation boundary and never changes afterwards.
#[derive(Debug, Clone)]
pub struct CreatePayload {
    pub external_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    /// Non-empty: create requires at least one address.
    pub emails: Vec<EmailEntry>,
    pub image_url: Option<String>,
}

/// Payload of an `identity.update` event: every field other than the
/// external id is an optional delta.
#[derive(Debug, Clone)]
pub struct UpdatePayload {
    pub external_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    /// May be empty, meaning "no email change".
    pub emails: Vec<EmailEntry>,
    pub image_url: Option<String>,
}

/// Payload of an `identity.delete` event.
#[derive(Debug, Clone)]
pub struct DeletePayload {
    pub external_id: String,
}
