use ids_core::CoreError;
use ids_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("{source} {location}")]
    Payload {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Store error: {source} {location}")]
    Store {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Unknown event kind: {name} {location}")]
    UnknownEvent {
        name: String,
        location: ErrorLocation,
    },

    #[error("Serialization error: {source} {location}")]
    Serialize {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl From<CoreError> for SyncError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Payload {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for SyncError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for SyncError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl SyncError {
    /// Whether the transport should redeliver the event. A malformed payload
    /// never becomes valid on retry; a store failure can clear.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Store { .. })
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
