use std::collections::HashMap;

use afisha_event::{CreateEventInput, EventRow, FeedFilter, Status, UpdateEventInput};
use afisha_shared::Actor;
use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

use super::AppState;
use super::categories::CategoryResponse;

const DEFAULT_PAGE_SIZE: u64 = 20;
const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryResponse>,
    pub organizer_id: String,
    pub status: Status,
    pub moderation_comment: Option<String>,
    pub starts_at: i64,
    pub ends_at: Option<i64>,
    pub address_text: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub is_free: bool,
    pub price_from: Option<i64>,
    pub capacity: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl EventResponse {
    pub fn with_category(row: EventRow, category: Option<CategoryResponse>) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            category_id: row.category_id,
            category,
            organizer_id: row.organizer_id,
            status: row.status.0,
            moderation_comment: row.moderation_comment,
            starts_at: row.starts_at,
            ends_at: row.ends_at,
            address_text: row.address_text,
            latitude: row.latitude,
            longitude: row.longitude,
            is_free: row.is_free,
            price_from: row.price_from,
            capacity: row.capacity,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<EventRow> for EventResponse {
    fn from(row: EventRow) -> Self {
        Self::with_category(row, None)
    }
}

/// Resolves the category of each row, so feed entries carry the category
/// object the way the feed and map render it.
pub async fn attach_categories(
    state: &AppState,
    rows: Vec<EventRow>,
) -> AppResult<Vec<EventResponse>> {
    let mut ids = rows
        .iter()
        .map(|row| row.category_id.to_owned())
        .collect::<Vec<_>>();
    ids.sort();
    ids.dedup();

    let categories = state
        .event_query
        .categories_by_ids(&ids)
        .await
        .map_err(AppError::Internal)?
        .into_iter()
        .map(|category| (category.id.to_owned(), category))
        .collect::<HashMap<_, _>>();

    Ok(rows
        .into_iter()
        .map(|row| {
            let category = categories
                .get(&row.category_id)
                .cloned()
                .map(CategoryResponse::from);
            EventResponse::with_category(row, category)
        })
        .collect())
}

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub category_id: Option<String>,
    pub date_from: Option<i64>,
    pub date_to: Option<i64>,
    pub q: Option<String>,
    pub lat_min: Option<f64>,
    pub lat_max: Option<f64>,
    pub lng_min: Option<f64>,
    pub lng_max: Option<f64>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// GET /events - published events for the feed and the map
pub async fn feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> AppResult<Json<Vec<EventResponse>>> {
    let filter = FeedFilter {
        category_id: query.category_id,
        date_from: query.date_from,
        date_to: query.date_to,
        q: query.q,
        lat_min: query.lat_min,
        lat_max: query.lat_max,
        lng_min: query.lng_min,
        lng_max: query.lng_max,
        limit: query.limit.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE),
        offset: query.offset.unwrap_or(0),
    };

    let rows = state
        .event_query
        .feed(filter)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(attach_categories(&state, rows).await?))
}

/// GET /events/{id} - public lookup, published events only
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<EventResponse>> {
    let Some(row) = state
        .event_query
        .find_published(id)
        .await
        .map_err(AppError::Internal)?
    else {
        return Err(afisha_shared::Error::NotFound("event not found".to_string()).into());
    };

    let mut events = attach_categories(&state, vec![row]).await?;

    Ok(Json(events.remove(0)))
}

#[derive(Debug, Deserialize)]
pub struct MineQuery {
    pub status: Option<Status>,
}

/// GET /events/my - caller's own events; archive hidden unless asked for
pub async fn mine(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Query(query): Query<MineQuery>,
) -> AppResult<Json<Vec<EventResponse>>> {
    let rows = state
        .event_query
        .mine(&actor.id, query.status)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(attach_categories(&state, rows).await?))
}

/// GET /events/{id}/manage - any status, owner or admin only
pub async fn manage(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
) -> AppResult<Json<EventResponse>> {
    let Some(row) = state
        .event_query
        .find(id)
        .await
        .map_err(AppError::Internal)?
    else {
        return Err(afisha_shared::Error::NotFound("event not found".to_string()).into());
    };

    if !actor.can_manage(&row.organizer_id) {
        return Err(afisha_shared::Error::Forbidden(
            "cannot manage another organizer's event".to_string(),
        )
        .into());
    }

    let mut events = attach_categories(&state, vec![row]).await?;

    Ok(Json(events.remove(0)))
}

/// POST /events - create a draft (organizer)
pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(input): Json<CreateEventInput>,
) -> AppResult<(StatusCode, Json<EventResponse>)> {
    let row = state.event.create(&actor, input).await?;
    let mut events = attach_categories(&state, vec![row]).await?;

    Ok((StatusCode::CREATED, Json(events.remove(0))))
}

/// PUT /events/{id}
pub async fn update(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
    Json(input): Json<UpdateEventInput>,
) -> AppResult<Json<EventResponse>> {
    let row = state.event.update(&actor, id, input).await?;
    let mut events = attach_categories(&state, vec![row]).await?;

    Ok(Json(events.remove(0)))
}

/// DELETE /events/{id}
pub async fn delete(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    state.event.delete(&actor, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /events/{id}/submit - draft/rejected -> pending_moderation
pub async fn submit(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
) -> AppResult<Json<EventResponse>> {
    let row = state.event.submit(&actor, id).await?;
    let mut events = attach_categories(&state, vec![row]).await?;

    Ok(Json(events.remove(0)))
}

/// POST /events/{id}/archive - published -> archived, owner or admin
pub async fn archive(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
) -> AppResult<Json<EventResponse>> {
    let row = state.event.archive(&actor, id).await?;
    let mut events = attach_categories(&state, vec![row]).await?;

    Ok(Json(events.remove(0)))
}
