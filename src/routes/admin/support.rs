//! Admin support-ticket route handlers

use afisha_shared::Actor;
use afisha_support::{ReplyTicketInput, Status};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::routes::AppState;
use crate::routes::support::SupportTicketResponse;

const DEFAULT_PAGE_SIZE: u64 = 100;
const MAX_PAGE_SIZE: u64 = 200;

#[derive(Debug, Deserialize)]
pub struct TicketListQuery {
    pub status: Option<Status>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// GET /admin/support-tickets
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<TicketListQuery>,
) -> AppResult<Json<Vec<SupportTicketResponse>>> {
    let rows = state
        .support_query
        .admin_list(
            query.status,
            query.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE),
            query.offset.unwrap_or(0),
        )
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// POST /admin/support-tickets/{id}/reply - marks the ticket answered and
/// notifies the reporter by email, best effort
pub async fn reply(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
    Json(input): Json<ReplyTicketInput>,
) -> AppResult<Json<SupportTicketResponse>> {
    let ticket = state.support.reply(&actor, id, input).await?;

    if let Ok(Some(user)) = state.user_query.find(&ticket.user_id).await {
        if let Some(reply) = ticket.admin_reply.as_deref() {
            if let Err(e) = state
                .email
                .send_support_reply(&user.email, &ticket.subject, reply)
            {
                tracing::warn!(ticket_id = %ticket.id, "Failed to send reply email: {e:?}");
            }
        }
    }

    Ok(Json(ticket.into()))
}

/// POST /admin/support-tickets/{id}/close
pub async fn close(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
) -> AppResult<Json<SupportTicketResponse>> {
    let ticket = state.support.close(&actor, id).await?;

    Ok(Json(ticket.into()))
}

/// DELETE /admin/support-tickets/{id}
pub async fn delete(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.support.delete(&actor, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
