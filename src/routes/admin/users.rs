//! Admin user management route handlers

use afisha_shared::{Actor, user::Role};
use afisha_user::{SetBlockedInput, SetRoleInput, UserFilter};
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::routes::AppState;
use crate::routes::users::UserResponse;

const DEFAULT_PAGE_SIZE: u64 = 50;
const MAX_PAGE_SIZE: u64 = 200;

#[derive(Debug, Deserialize)]
pub struct UserListQuery {
    pub role: Option<Role>,
    pub blocked: Option<bool>,
    pub q: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// GET /admin/users - filter by role, blocked flag, email/name search
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<UserListQuery>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let rows = state
        .user_query
        .list(UserFilter {
            role: query.role,
            blocked: query.blocked,
            q: query.q,
            limit: query.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE),
            offset: query.offset.unwrap_or(0),
        })
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// PATCH /admin/users/{id}/role
pub async fn set_role(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
    Json(input): Json<SetRoleInput>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user.set_role(&actor, id, input.role).await?;

    Ok(Json(user.into()))
}

/// PATCH /admin/users/{id}/block
pub async fn set_blocked(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
    Json(input): Json<SetBlockedInput>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user.set_blocked(&actor, id, input.blocked).await?;

    Ok(Json(user.into()))
}
