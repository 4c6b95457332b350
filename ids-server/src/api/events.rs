use crate::api::error::Result as ApiErrorResult;

use ids_sync::{IdentityEvent, SyncContext, dispatch};

use axum::{Json, extract::State};
use log::info;
use serde::Deserialize;
use serde_json::Value;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Shared state for the router.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// One event delivery as POSTed by the transport.
#[derive(Debug, Deserialize)]
pub struct EventDelivery {
    /// Opaque delivery id echoed in logs; generated when omitted.
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub data: Value,
}

/// POST /api/events/identity - apply one identity lifecycle event.
///
/// 200 carries the handler outcome (including the structured update
/// not-found result); 4xx marks the delivery permanently failed; 5xx asks
/// the transport to redeliver.
pub async fn deliver_identity_event(
    State(state): State<AppState>,
    Json(delivery): Json<EventDelivery>,
) -> ApiErrorResult<Json<Value>> {
    let event = IdentityEvent {
        id: delivery
            .id
            .unwrap_or_else(|| Uuid::new_v4().to_string()),
        name: delivery.name,
        data: delivery.data,
    };

    info!("[evt {}] received {}", event.id, event.name);

    let ctx = SyncContext::new(state.pool.clone());
    let outcome = dispatch(&event, &ctx).await?;

    Ok(Json(outcome))
}
