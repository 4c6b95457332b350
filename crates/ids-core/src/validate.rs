//! Boundary conversion of raw provider payloads into typed event payloads.
//!
//! The provider delivers loosely-shaped JSON; nothing past this module sees
//! it. Validation is all-or-nothing: the first failing field rejects the
//! whole event, reported with its field path. Missing and `null` optional
//! fields are treated alike.

use crate::models::identity_event::{CreatePayload, DeletePayload, EmailEntry, UpdatePayload};
use crate::{CoreError, MAX_FIELD_LEN, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Map, Value};

/// Validate an `identity.create` payload: external id and at least one
/// syntactically valid email address are mandatory.
pub fn validate_create(data: &Value) -> CoreErrorResult<CreatePayload> {
    let obj = require_object(data)?;
    let external_id = require_external_id(obj)?;
    let emails = validate_email_entries(obj, true)?;

    Ok(CreatePayload {
        external_id,
        first_name: optional_string(obj, "first_name")?,
        last_name: optional_string(obj, "last_name")?,
        full_name: optional_string(obj, "full_name")?,
        emails,
        image_url: optional_image_url(obj)?,
    })
}

/// Validate an `identity.update` payload: same field constraints as create,
/// but everything other than the external id is optional.
pub fn validate_update(data: &Value) -> CoreErrorResult<UpdatePayload> {
    let obj = require_object(data)?;
    let external_id = require_external_id(obj)?;
    let emails = validate_email_entries(obj, false)?;

    Ok(UpdatePayload {
        external_id,
        first_name: optional_string(obj, "first_name")?,
        last_name: optional_string(obj, "last_name")?,
        full_name: optional_string(obj, "full_name")?,
        emails,
        image_url: optional_image_url(obj)?,
    })
}

/// Validate an `identity.delete` payload: only the external id is mandatory.
pub fn validate_delete(data: &Value) -> CoreErrorResult<DeletePayload> {
    let obj = require_object(data)?;
    let external_id = require_external_id(obj)?;

    Ok(DeletePayload { external_id })
}

#[track_caller]
fn validation_error(message: impl Into<String>, field: impl Into<String>) -> CoreError {
    CoreError::Validation {
        message: message.into(),
        field: Some(field.into()),
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn require_object(data: &Value) -> CoreErrorResult<&Map<String, Value>> {
    data.as_object().ok_or_else(|| CoreError::Validation {
        message: "payload must be an object".to_string(),
        field: None,
        location: ErrorLocation::from(Location::caller()),
    })
}

/// The provider carries its stable identifier in the payload's own `id`
/// field for all event kinds; it becomes `external_id` from here on.
#[track_caller]
fn require_external_id(obj: &Map<String, Value>) -> CoreErrorResult<String> {
    match obj.get("id") {
        Some(Value::String(s)) if s.trim().is_empty() => {
            Err(validation_error("id must not be empty", "id"))
        }
        Some(Value::String(s)) if s.len() > MAX_FIELD_LEN => Err(validation_error(
            format!("id exceeds maximum length ({MAX_FIELD_LEN})"),
            "id",
        )),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(validation_error("id must be a string", "id")),
        None => Err(validation_error("id is required", "id")),
    }
}

/// A present non-string (other than null) is an error, not a skip.
#[track_caller]
fn optional_string(obj: &Map<String, Value>, field: &str) -> CoreErrorResult<Option<String>> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(validation_error(format!("{field} must be a string"), field)),
    }
}

#[track_caller]
fn optional_bool(entry: &Map<String, Value>, field: &str, path: &str) -> CoreErrorResult<bool> {
    match entry.get(field) {
        None | Some(Value::Null) => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(validation_error(
            format!("{field} must be a boolean"),
            format!("{path}.{field}"),
        )),
    }
}

#[track_caller]
fn validate_email_entries(
    obj: &Map<String, Value>,
    required: bool,
) -> CoreErrorResult<Vec<EmailEntry>> {
    let entries = match obj.get("email_addresses") {
        None | Some(Value::Null) => {
            if required {
                return Err(validation_error(
                    "email_addresses is required",
                    "email_addresses",
                ));
            }
            return Ok(Vec::new());
        }
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(validation_error(
                "email_addresses must be an array",
                "email_addresses",
            ));
        }
    };

    if required && entries.is_empty() {
        return Err(validation_error(
            "email_addresses must contain at least one entry",
            "email_addresses",
        ));
    }

    let mut validated = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let path = format!("email_addresses[{index}]");

        let entry = entry
            .as_object()
            .ok_or_else(|| validation_error("entry must be an object", path.clone()))?;

        let address = match entry.get("email_address") {
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(validation_error(
                    "email_address must be a string",
                    format!("{path}.email_address"),
                ));
            }
            None => {
                return Err(validation_error(
                    "email_address is required",
                    format!("{path}.email_address"),
                ));
            }
        };

        if !is_valid_email(&address) {
            return Err(validation_error(
                format!("'{address}' is not a valid email address"),
                format!("{path}.email_address"),
            ));
        }

        validated.push(EmailEntry {
            address,
            primary: optional_bool(entry, "primary", &path)?,
            verified: optional_bool(entry, "verified", &path)?,
        });
    }

    Ok(validated)
}

#[track_caller]
fn optional_image_url(obj: &Map<String, Value>) -> CoreErrorResult<Option<String>> {
    let Some(url) = optional_string(obj, "image_url")? else {
        return Ok(None);
    };

    if !is_valid_url(&url) {
        return Err(validation_error(
            format!("'{url}' is not a valid URL"),
            "image_url",
        ));
    }

    Ok(Some(url))
}

/// Syntactic email check: single `@`, non-empty local and domain parts,
/// dotted domain, no whitespace, within the field ceiling.
fn is_valid_email(address: &str) -> bool {
    let address = address.trim();
    if address.is_empty()
        || address.len() > MAX_FIELD_LEN
        || address.chars().any(char::is_whitespace)
    {
        return false;
    }

    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Syntactic URL check: http or https scheme with a non-empty remainder.
fn is_valid_url(url: &str) -> bool {
    if url.chars().any(char::is_whitespace) {
        return false;
    }

    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .is_some_and(|rest| !rest.is_empty())
}
