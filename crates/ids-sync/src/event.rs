use serde::Deserialize;
use serde_json::Value;

/// Lifecycle event kinds emitted by the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Create,
    Update,
    Delete,
}

impl EventKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "identity.create" => Some(Self::Create),
            "identity.update" => Some(Self::Update),
            "identity.delete" => Some(Self::Delete),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "identity.create",
            Self::Update => "identity.update",
            Self::Delete => "identity.delete",
        }
    }
}

/// One delivery from the event transport.
///
/// `id` is the transport's opaque delivery identifier, echoed in every log
/// line for correlation. `data` is the raw provider payload and does not
/// cross the validator boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityEvent {
    pub id: String,
    pub name: String,
    pub data: Value,
}

impl IdentityEvent {
    pub fn kind(&self) -> Option<EventKind> {
        EventKind::parse(&self.name)
    }

    /// Best-effort external id for error logs. Works on the raw payload so
    /// it is available even when validation rejects the event.
    pub fn payload_external_id(&self) -> Option<&str> {
        self.data.get("id").and_then(Value::as_str)
    }
}
