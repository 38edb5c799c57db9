use afisha_shared::Actor;
use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use crate::error::{AppError, AppResult};

use super::AppState;
use super::events::{EventResponse, attach_categories};

/// GET /favorites - the caller's favorite events, published only
pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> AppResult<Json<Vec<EventResponse>>> {
    let rows = state
        .event_query
        .favorites_of(&actor.id)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(attach_categories(&state, rows).await?))
}

/// GET /favorites/{event_id} - is the event in the caller's favorites
pub async fn check(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(event_id): Path<String>,
) -> AppResult<Json<Value>> {
    let is_favorite = state
        .event_query
        .is_favorite(&actor.id, &event_id)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(json!({ "is_favorite": is_favorite })))
}

/// POST /favorites/{event_id} - idempotent add
pub async fn add(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(event_id): Path<String>,
) -> AppResult<(StatusCode, Json<Value>)> {
    state.event.add_favorite(&actor, event_id).await?;

    Ok((StatusCode::CREATED, Json(json!({ "is_favorite": true }))))
}

/// DELETE /favorites/{event_id} - idempotent remove
pub async fn remove(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(event_id): Path<String>,
) -> AppResult<Json<Value>> {
    state.event.remove_favorite(&actor, event_id).await?;

    Ok(Json(json!({ "is_favorite": false })))
}
