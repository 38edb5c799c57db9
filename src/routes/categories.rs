use afisha_event::{CategoryRow, CreateCategoryInput};
use afisha_shared::Actor;
use axum::{Extension, Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::error::{AppError, AppResult};

use super::AppState;

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

impl From<CategoryRow> for CategoryResponse {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            slug: row.slug,
            description: row.description,
        }
    }
}

/// GET /categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<CategoryResponse>>> {
    let categories = state
        .event_query
        .categories()
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

/// POST /categories (admin)
pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(input): Json<CreateCategoryInput>,
) -> AppResult<(StatusCode, Json<CategoryResponse>)> {
    let category = state.event.create_category(&actor, input).await?;

    Ok((StatusCode::CREATED, Json(category.into())))
}
