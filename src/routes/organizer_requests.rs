use afisha_organizer::{OrganizerRequestRow, Status, SubmitRequestInput};
use afisha_shared::Actor;
use axum::{Extension, Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::error::{AppError, AppResult};

use super::AppState;

#[derive(Debug, Serialize)]
pub struct OrganizerRequestResponse {
    pub id: String,
    pub user_id: String,
    pub status: Status,
    pub message: String,
    pub admin_comment: Option<String>,
    pub created_at: i64,
    pub resolved_at: Option<i64>,
}

impl From<OrganizerRequestRow> for OrganizerRequestResponse {
    fn from(row: OrganizerRequestRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            status: row.status.0,
            message: row.message,
            admin_comment: row.admin_comment,
            created_at: row.created_at,
            resolved_at: row.resolved_at,
        }
    }
}

/// POST /organizer-requests
pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(input): Json<SubmitRequestInput>,
) -> AppResult<(StatusCode, Json<OrganizerRequestResponse>)> {
    let row = state.organizer.submit(&actor, input).await?;

    Ok((StatusCode::CREATED, Json(row.into())))
}

/// GET /organizer-requests/my
pub async fn mine(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> AppResult<Json<Vec<OrganizerRequestResponse>>> {
    let rows = state
        .organizer_query
        .mine(&actor.id)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
