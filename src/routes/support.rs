use afisha_shared::Actor;
use afisha_support::{OpenTicketInput, Status, SupportTicketRow};
use axum::{Extension, Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::error::{AppError, AppResult};

use super::AppState;

#[derive(Debug, Serialize)]
pub struct SupportTicketResponse {
    pub id: String,
    pub user_id: String,
    pub subject: String,
    pub message: String,
    pub status: Status,
    pub admin_reply: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<SupportTicketRow> for SupportTicketResponse {
    fn from(row: SupportTicketRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            subject: row.subject,
            message: row.message,
            status: row.status.0,
            admin_reply: row.admin_reply,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// POST /support-tickets
pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(input): Json<OpenTicketInput>,
) -> AppResult<(StatusCode, Json<SupportTicketResponse>)> {
    let row = state.support.open(&actor, input).await?;

    Ok((StatusCode::CREATED, Json(row.into())))
}

/// GET /support-tickets/my
pub async fn mine(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> AppResult<Json<Vec<SupportTicketResponse>>> {
    let rows = state
        .support_query
        .mine(&actor.id)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}
