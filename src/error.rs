use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Unauthorized(String),

    #[error(transparent)]
    Domain(#[from] afisha_shared::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                json!({ "error": message }),
            ),
            AppError::Domain(afisha_shared::Error::Validate(errors)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": "validation failed", "details": errors }),
            ),
            AppError::Domain(afisha_shared::Error::BadRequest(message)) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            AppError::Domain(afisha_shared::Error::Forbidden(message)) => {
                (StatusCode::FORBIDDEN, json!({ "error": message }))
            }
            AppError::Domain(afisha_shared::Error::NotFound(message)) => {
                (StatusCode::NOT_FOUND, json!({ "error": message }))
            }
            AppError::Domain(afisha_shared::Error::Conflict(message)) => {
                (StatusCode::CONFLICT, json!({ "error": message }))
            }
            AppError::Domain(afisha_shared::Error::Server(message)) => {
                tracing::error!("server error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal server error" }),
                )
            }
            AppError::Domain(afisha_shared::Error::Unknown(error)) => {
                tracing::error!("unhandled error: {error:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal server error" }),
                )
            }
            AppError::Internal(error) => {
                tracing::error!("internal error: {error:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
