//! Derivation of a canonical email and display name from a noisy,
//! multi-valued provider payload.

use crate::models::identity_event::EmailEntry;
use crate::{CoreError, MAX_FIELD_LEN, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Select the canonical address. Deterministic tie-break, in order: an entry
/// flagged primary, else an entry flagged verified, else the first entry in
/// payload order. The selected address is trimmed and lower-cased.
#[track_caller]
pub fn primary_email(emails: &[EmailEntry]) -> CoreErrorResult<String> {
    let chosen = emails
        .iter()
        .find(|e| e.primary)
        .or_else(|| emails.iter().find(|e| e.verified))
        .or_else(|| emails.first());

    match chosen {
        Some(entry) => Ok(entry.address.trim().to_lowercase()),
        None => Err(CoreError::Normalization {
            message: "no email address available in payload".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Join trimmed first and last names with a single space; fall back to the
/// trimmed full name; an empty result stays empty.
pub fn compose_name(first: Option<&str>, last: Option<&str>, full: Option<&str>) -> String {
    let first = first.unwrap_or("").trim();
    let last = last.unwrap_or("").trim();

    let joined = [first, last]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    if joined.is_empty() {
        full.unwrap_or("").trim().to_string()
    } else {
        joined
    }
}

/// Name for a create: an empty composition is an error.
#[track_caller]
pub fn required_name(
    first: Option<&str>,
    last: Option<&str>,
    full: Option<&str>,
) -> CoreErrorResult<String> {
    match optional_name(first, last, full)? {
        Some(name) => Ok(name),
        None => Err(CoreError::Normalization {
            message: "no usable name available in payload".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Name for an update: an empty composition means "no name change".
#[track_caller]
pub fn optional_name(
    first: Option<&str>,
    last: Option<&str>,
    full: Option<&str>,
) -> CoreErrorResult<Option<String>> {
    let name = compose_name(first, last, full);

    if name.is_empty() {
        Ok(None)
    } else if name.len() > MAX_FIELD_LEN {
        Err(CoreError::Normalization {
            message: format!("composed name exceeds maximum length ({MAX_FIELD_LEN})"),
            location: ErrorLocation::from(Location::caller()),
        })
    } else {
        Ok(Some(name))
    }
}
