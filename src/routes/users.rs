use afisha_shared::{Actor, user::Role};
use afisha_user::{UpdateProfileInput, UserRow};
use axum::{Extension, Json, extract::State};
use serde::Serialize;

use crate::error::AppResult;

use super::AppState;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub phone: Option<String>,
    pub telegram: Option<String>,
    pub about: Option<String>,
    pub preferences: Option<String>,
    pub role: Role,
    pub blocked: bool,
    pub created_at: i64,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            full_name: row.full_name,
            avatar_url: row.avatar_url,
            phone: row.phone,
            telegram: row.telegram,
            about: row.about,
            preferences: row.preferences,
            role: row.role.0,
            blocked: row.blocked,
            created_at: row.created_at,
        }
    }
}

/// GET /users/me
pub async fn me(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> AppResult<Json<UserResponse>> {
    let Some(user) = state.user.load(&actor.id).await? else {
        return Err(afisha_shared::Error::NotFound("user not found".to_string()).into());
    };

    Ok(Json(user.into()))
}

/// PUT /users/me
pub async fn update_me(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(input): Json<UpdateProfileInput>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user.update_profile(&actor, input).await?;

    Ok(Json(user.into()))
}
