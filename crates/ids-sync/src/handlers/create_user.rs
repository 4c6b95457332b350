use crate::{CreateUserResult, IdentityEvent, Result as SyncErrorResult, SyncContext};

use ids_core::{NewUser, normalize, validate};

use log::debug;

/// Handle `identity.create`: validate the raw payload, normalize email and
/// name (both mandatory here), then atomically insert-or-merge the canonical
/// record keyed on the external id. Redelivery of the same event lands on
/// the merge path and leaves a single row.
pub async fn handle_create_user(
    event: &IdentityEvent,
    ctx: &SyncContext,
) -> SyncErrorResult<CreateUserResult> {
    debug!("[evt {}] create starting", event.id);

    // 1. Validate the raw provider payload
    let payload = validate::validate_create(&event.data)?;

    // 2. Normalize identity fields
    let email = normalize::primary_email(&payload.emails)?;
    let name = normalize::required_name(
        payload.first_name.as_deref(),
        payload.last_name.as_deref(),
        payload.full_name.as_deref(),
    )?;

    // 3. Atomic insert-or-merge
    let user = ctx
        .users()
        .upsert_by_external_id(&NewUser {
            external_id: payload.external_id.clone(),
            name,
            email,
            image: payload.image_url.unwrap_or_default(),
        })
        .await?;

    debug!(
        "[evt {}] create synchronized user id={} external_id={}",
        event.id, user.id, payload.external_id
    );

    Ok(CreateUserResult {
        success: true,
        id: user.id,
        external_id: payload.external_id,
        user_data: user,
    })
}
