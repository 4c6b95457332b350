use crate::{IdentityEvent, Result as SyncErrorResult, SyncContext, UpdateUserOutcome};

use ids_core::{UpdatePayload, UserPatch, normalize, validate};

use log::{debug, info};

/// Handle `identity.update`: validate, then build a sparse update set from
/// the fields actually present after normalization and apply it where the
/// external id matches. Zero matched rows is a structured not-found outcome,
/// never an error, and never an implicit create.
pub async fn handle_update_user(
    event: &IdentityEvent,
    ctx: &SyncContext,
) -> SyncErrorResult<UpdateUserOutcome> {
    debug!("[evt {}] update starting", event.id);

    // 1. Validate (everything but the external id is an optional delta)
    let UpdatePayload {
        external_id,
        first_name,
        last_name,
        full_name,
        emails,
        image_url,
    } = validate::validate_update(&event.data)?;

    // 2. Build the sparse update set; absent fields stay untouched
    let mut patch = UserPatch::default();

    if !emails.is_empty() {
        patch.email = Some(normalize::primary_email(&emails)?);
    }

    // An empty composed name means "no name change", not an empty write
    patch.name = normalize::optional_name(
        first_name.as_deref(),
        last_name.as_deref(),
        full_name.as_deref(),
    )?;

    patch.image = image_url;

    // 3. Apply where the external id matches
    let updated = ctx
        .users()
        .update_by_external_id(&external_id, &patch)
        .await?;

    match updated {
        Some(user) => {
            debug!(
                "[evt {}] update applied to user id={} external_id={}",
                event.id, user.id, external_id
            );

            Ok(UpdateUserOutcome::Applied {
                success: true,
                id: user.id,
                external_id,
                user_data: user,
            })
        }
        None => {
            info!(
                "[evt {}] update target external_id={} not found",
                event.id, external_id
            );

            Ok(UpdateUserOutcome::NotFound {
                success: false,
                reason: "not_found",
                external_id,
            })
        }
    }
}
