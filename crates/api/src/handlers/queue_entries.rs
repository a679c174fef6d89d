//! Handlers for the `/queue-entries` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lineup_core::error::CoreError;
use lineup_core::queue::{CreateQueueEntry, QueueEntry, UpdateQueueEntry};
use lineup_core::types::EntityId;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/queue-entries
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<QueueEntry>>> {
    Ok(Json(state.services.queue.list().await?))
}

/// GET /api/queue-entries/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<QueueEntry>> {
    let entry = state
        .services
        .queue
        .get(id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "QueueEntry",
            id,
        })?;
    Ok(Json(entry))
}

/// GET /api/queue-entries/service-line/{serviceLineId}
pub async fn by_service_line(
    State(state): State<AppState>,
    Path(service_line_id): Path<EntityId>,
) -> AppResult<Json<Vec<QueueEntry>>> {
    Ok(Json(
        state
            .services
            .queue
            .entries_for_service_line(service_line_id)
            .await?,
    ))
}

/// GET /api/queue-entries/user/{userId}
pub async fn by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<QueueEntry>>> {
    Ok(Json(state.services.queue.entries_for_user(&user_id).await?))
}

/// POST /api/queue-entries
///
/// The entry is persisted exactly as supplied; there are no server-side
/// defaults for status or join time.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateQueueEntry>,
) -> AppResult<(StatusCode, Json<QueueEntry>)> {
    let entry = state.services.queue.join(input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// PUT /api/queue-entries/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(details): Json<UpdateQueueEntry>,
) -> AppResult<Json<QueueEntry>> {
    let entry = state
        .services
        .queue
        .update(id, details)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "QueueEntry",
            id,
        })?;
    Ok(Json(entry))
}

/// DELETE /api/queue-entries/{id}
///
/// Idempotent: deleting an absent id still returns 204.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    state.services.queue.leave(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
