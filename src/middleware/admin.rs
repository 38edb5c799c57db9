//! Admin authorization middleware for Axum

use afisha_shared::Actor;
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::AppError;

/// Verifies the authenticated caller is an admin. Must be layered after
/// the auth middleware.
pub async fn admin_middleware(request: Request, next: Next) -> Result<Response, Response> {
    let actor = request
        .extensions()
        .get::<Actor>()
        .cloned()
        .ok_or_else(|| {
            tracing::warn!("Admin middleware reached without an authenticated caller");
            AppError::Unauthorized("authentication required".to_string()).into_response()
        })?;

    if !actor.is_admin() {
        tracing::warn!(user_id = %actor.id, "Non-admin caller on admin route");
        return Err(AppError::Domain(afisha_shared::Error::Forbidden(
            "admin role required".to_string(),
        ))
        .into_response());
    }

    Ok(next.run(request).await)
}
