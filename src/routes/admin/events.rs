//! Admin moderation route handlers

use afisha_event::{RejectEventInput, Status};
use afisha_shared::Actor;
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::routes::AppState;
use crate::routes::events::{EventResponse, attach_categories};

const DEFAULT_PAGE_SIZE: u64 = 100;
const MAX_PAGE_SIZE: u64 = 200;

#[derive(Debug, Deserialize)]
pub struct ModerationListQuery {
    pub status: Option<Status>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// GET /admin/events - moderation queue by default
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ModerationListQuery>,
) -> AppResult<Json<Vec<EventResponse>>> {
    let status = query.status.or(Some(Status::PendingModeration));

    let rows = state
        .event_query
        .admin_list(
            status,
            query.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE),
            query.offset.unwrap_or(0),
        )
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(attach_categories(&state, rows).await?))
}

/// POST /admin/events/{id}/publish
pub async fn publish(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
) -> AppResult<Json<EventResponse>> {
    let row = state.event.publish(&actor, id).await?;

    tracing::info!(event_id = %row.id, admin_id = %actor.id, "event published");

    let mut events = attach_categories(&state, vec![row]).await?;

    Ok(Json(events.remove(0)))
}

/// POST /admin/events/{id}/reject - moderation comment required
pub async fn reject(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
    Json(input): Json<RejectEventInput>,
) -> AppResult<Json<EventResponse>> {
    let row = state.event.reject(&actor, id, input).await?;

    tracing::info!(event_id = %row.id, admin_id = %actor.id, "event rejected");

    let mut events = attach_categories(&state, vec![row]).await?;

    Ok(Json(events.remove(0)))
}

/// DELETE /admin/events/{id} - hard delete, any status
pub async fn delete(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.event.delete(&actor, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
