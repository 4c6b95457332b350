use crate::{DeleteUserResult, IdentityEvent, Result as SyncErrorResult, SyncContext};

use ids_core::validate;

use log::debug;

/// Handle `identity.delete`: validate the external id, delete the matching
/// row. A replayed delete matches zero rows and reports success with
/// `deleted: false`.
pub async fn handle_delete_user(
    event: &IdentityEvent,
    ctx: &SyncContext,
) -> SyncErrorResult<DeleteUserResult> {
    debug!("[evt {}] delete starting", event.id);

    // 1. Validate (only the external id is mandatory)
    let payload = validate::validate_delete(&event.data)?;

    // 2. Delete where the external id matches
    let rows = ctx
        .users()
        .delete_by_external_id(&payload.external_id)
        .await?;

    let deleted = !rows.is_empty();

    debug!(
        "[evt {}] delete external_id={} removed {} row(s)",
        event.id,
        payload.external_id,
        rows.len()
    );

    Ok(DeleteUserResult {
        success: true,
        deleted,
        external_id: payload.external_id,
        rows: rows.len() as u64,
    })
}
