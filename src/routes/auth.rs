use afisha_user::{LoginInput, RegisterInput};
use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::auth::generate_token;
use crate::error::AppResult;

use super::AppState;
use super::users::UserResponse;

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.user.register(input).await?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> AppResult<Json<TokenResponse>> {
    let user = state.user.login(input).await?;

    let access_token = generate_token(
        &user.id,
        user.role.0,
        &state.config.jwt.secret,
        state.config.jwt.expiration_minutes,
    )?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}
