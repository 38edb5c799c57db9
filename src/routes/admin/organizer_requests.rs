//! Admin organizer-request route handlers

use afisha_organizer::{DecideRequestInput, Status};
use afisha_shared::Actor;
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::routes::AppState;
use crate::routes::organizer_requests::OrganizerRequestResponse;

const DEFAULT_PAGE_SIZE: u64 = 100;
const MAX_PAGE_SIZE: u64 = 200;

#[derive(Debug, Deserialize)]
pub struct RequestListQuery {
    pub status: Option<Status>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// GET /admin/organizer-requests
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<RequestListQuery>,
) -> AppResult<Json<Vec<OrganizerRequestResponse>>> {
    let rows = state
        .organizer_query
        .admin_list(
            query.status,
            query.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE),
            query.offset.unwrap_or(0),
        )
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// POST /admin/organizer-requests/{id}/approve
///
/// Flips the requester's role together with the request status; the
/// decision email is best effort.
pub async fn approve(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
    Json(input): Json<DecideRequestInput>,
) -> AppResult<Json<OrganizerRequestResponse>> {
    let request = state.organizer.approve(&actor, id, input).await?;

    notify_decision(&state, &request.user_id, true, request.admin_comment.as_deref()).await;

    Ok(Json(request.into()))
}

/// POST /admin/organizer-requests/{id}/reject
pub async fn reject(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
    Json(input): Json<DecideRequestInput>,
) -> AppResult<Json<OrganizerRequestResponse>> {
    let request = state.organizer.reject(&actor, id, input).await?;

    notify_decision(&state, &request.user_id, false, request.admin_comment.as_deref()).await;

    Ok(Json(request.into()))
}

async fn notify_decision(state: &AppState, user_id: &str, approved: bool, comment: Option<&str>) {
    let user = match state.user_query.find(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return,
        Err(e) => {
            tracing::warn!("Failed to load user for decision email: {e:?}");
            return;
        }
    };

    if let Err(e) = state.email.send_organizer_request_decision(
        &user.email,
        approved,
        comment.unwrap_or_default(),
    ) {
        tracing::warn!(user_id = %user_id, "Failed to send decision email: {e:?}");
    }
}
