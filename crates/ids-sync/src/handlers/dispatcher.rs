use crate::{
    EventKind, IdentityEvent, Result as SyncErrorResult, SyncContext, SyncError,
    handle_create_user, handle_delete_user, handle_update_user,
};

use std::panic::Location;

use error_location::ErrorLocation;
use log::{error, info};
use serde::Serialize;
use serde_json::Value;

/// Dispatch one transport delivery to its handler and serialize the outcome
/// for the transport.
///
/// Any failure is logged with the event correlation id and the best-effort
/// external id from the raw payload, then propagated unchanged. The
/// transport's retry policy governs redelivery, not this pipeline.
pub async fn dispatch(event: &IdentityEvent, ctx: &SyncContext) -> SyncErrorResult<Value> {
    let result = dispatch_inner(event, ctx).await;

    if let Err(ref e) = result {
        error!(
            "[evt {}] {} failed, payload id: {:?}: {}",
            event.id,
            event.name,
            event.payload_external_id(),
            e
        );
    }

    result
}

async fn dispatch_inner(event: &IdentityEvent, ctx: &SyncContext) -> SyncErrorResult<Value> {
    let kind = event.kind().ok_or_else(|| SyncError::UnknownEvent {
        name: event.name.clone(),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let outcome = match kind {
        EventKind::Create => to_value(&handle_create_user(event, ctx).await?)?,
        EventKind::Update => to_value(&handle_update_user(event, ctx).await?)?,
        EventKind::Delete => to_value(&handle_delete_user(event, ctx).await?)?,
    };

    info!("[evt {}] {} completed", event.id, event.name);

    Ok(outcome)
}

fn to_value<T: Serialize>(outcome: &T) -> SyncErrorResult<Value> {
    Ok(serde_json::to_value(outcome)?)
}
