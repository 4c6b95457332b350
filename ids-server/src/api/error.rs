//! HTTP error mapping for the event delivery surface.
//!
//! The status code is the retry signal: the transport redelivers on 5xx and
//! finalizes on 4xx, so permanent payload failures must never map to 5xx.

use ids_core::CoreError;
use ids_sync::SyncError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field path if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed payload field (400, permanent)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// No usable email or name where one is required (400, permanent)
    #[error("Normalization failed: {message} {location}")]
    Normalization {
        message: String,
        location: ErrorLocation,
    },

    /// Unknown event kind or unusable envelope (400, permanent)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Store or other transient failure (500, retryable)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::error!("{}", self);

        let (status, body) = match self {
            ApiError::Validation { message, field, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "VALIDATION_ERROR".into(),
                    message,
                    field,
                },
            ),
            ApiError::Normalization { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "NORMALIZATION_ERROR".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    code: "BAD_REQUEST".into(),
                    message,
                    field: None,
                },
            ),
            ApiError::Internal { message, .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorBody {
                    code: "INTERNAL_ERROR".into(),
                    message,
                    field: None,
                },
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

/// Map pipeline errors onto the retry-signalling status codes
impl From<SyncError> for ApiError {
    #[track_caller]
    fn from(e: SyncError) -> Self {
        match e {
            SyncError::Payload {
                source: CoreError::Validation { message, field, .. },
                ..
            } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            SyncError::Payload {
                source: CoreError::Normalization { message, .. },
                ..
            } => ApiError::Normalization {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            SyncError::UnknownEvent { name, .. } => ApiError::BadRequest {
                message: format!("Unknown event kind: {name}"),
                location: ErrorLocation::from(Location::caller()),
            },
            // Don't expose store details to the transport
            SyncError::Store { .. } => ApiError::Internal {
                message: "Store operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
            SyncError::Serialize { source, .. } => ApiError::Internal {
                message: format!("Failed to serialize outcome: {source}"),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
