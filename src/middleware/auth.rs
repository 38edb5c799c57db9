//! Authentication middleware for Axum

use afisha_shared::Actor;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use crate::auth::validate_token;
use crate::error::AppError;
use crate::routes::AppState;

/// Validates the bearer token, resolves the caller from the datastore and
/// injects an [`Actor`] into request extensions.
///
/// Fails closed: a missing account or a blocked account is denied before
/// any handler runs, whatever role the token claims.
pub async fn auth_middleware(
    State(state): State<AppState>,
    bearer: Option<TypedHeader<Authorization<Bearer>>>,
    mut req: Request,
    next: Next,
) -> Response {
    let Some(TypedHeader(Authorization(bearer))) = bearer else {
        tracing::warn!("Missing bearer token");
        return AppError::Unauthorized("missing bearer token".to_string()).into_response();
    };

    let claims = match validate_token(bearer.token(), &state.config.jwt.secret) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::warn!("Invalid or expired token: {e:?}");
            return AppError::Unauthorized("invalid or expired token".to_string()).into_response();
        }
    };

    // The token only names the account; role and blocked flag come from
    // the datastore so admin actions take effect immediately.
    let user = match state.user.load(&claims.sub).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            tracing::warn!(user_id = %claims.sub, "Token for unknown user");
            return AppError::Unauthorized("user no longer exists".to_string()).into_response();
        }
        Err(e) => {
            tracing::error!("Failed to load user for auth: {e:?}");
            return AppError::Domain(e).into_response();
        }
    };

    if user.blocked {
        tracing::warn!(user_id = %user.id, "Blocked user denied");
        return AppError::Domain(afisha_shared::Error::Forbidden(
            "account blocked".to_string(),
        ))
        .into_response();
    }

    req.extensions_mut().insert(Actor::new(user.id, user.role.0));

    next.run(req).await
}
