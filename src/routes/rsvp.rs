use afisha_event::{RsvpRow, RsvpStats, RsvpStatus, SetRsvpInput};
use afisha_shared::Actor;
use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::error::{AppError, AppResult};

use super::AppState;
use super::events::{EventResponse, attach_categories};

#[derive(Debug, Serialize)]
pub struct RsvpResponse {
    pub id: String,
    pub user_id: String,
    pub event_id: String,
    pub status: RsvpStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<RsvpRow> for RsvpResponse {
    fn from(row: RsvpRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            event_id: row.event_id,
            status: row.status.0,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MyRsvpItem {
    #[serde(flatten)]
    pub rsvp: RsvpResponse,
    pub event: EventResponse,
}

/// PUT /events/{id}/rsvp - set or change the caller's RSVP
pub async fn set(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
    Json(input): Json<SetRsvpInput>,
) -> AppResult<Json<RsvpResponse>> {
    let row = state.event.set_rsvp(&actor, id, input.status).await?;

    Ok(Json(row.into()))
}

/// GET /events/{id}/rsvp/my - the caller's RSVP on an event, or null
pub async fn my(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
) -> AppResult<Json<Option<RsvpResponse>>> {
    let row = state
        .event_query
        .my_rsvp(&actor.id, &id)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(row.map(Into::into)))
}

/// GET /events/{id}/rsvp/stats - public per-status counts
pub async fn stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<RsvpStats>> {
    let stats = state
        .event_query
        .rsvp_stats(&id)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(stats))
}

/// GET /events/{id}/rsvp/list - all RSVPs of an event, organizer of that
/// event or admin
pub async fn list_for_event(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<RsvpResponse>>> {
    let Some(event) = state
        .event_query
        .find(&id)
        .await
        .map_err(AppError::Internal)?
    else {
        return Err(afisha_shared::Error::NotFound("event not found".to_string()).into());
    };

    if !actor.can_manage(&event.organizer_id) {
        return Err(afisha_shared::Error::Forbidden(
            "no access to this event's RSVPs".to_string(),
        )
        .into());
    }

    let rows = state
        .event_query
        .rsvps_for_event(&id)
        .await
        .map_err(AppError::Internal)?;

    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// GET /rsvp/my - all of the caller's RSVPs with their events
pub async fn mine(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> AppResult<Json<Vec<MyRsvpItem>>> {
    let rsvps = state
        .event_query
        .my_rsvps(&actor.id)
        .await
        .map_err(AppError::Internal)?;

    let event_ids = rsvps
        .iter()
        .map(|rsvp| rsvp.event_id.to_owned())
        .collect::<Vec<_>>();
    let events = state
        .event_query
        .events_by_ids(&event_ids)
        .await
        .map_err(AppError::Internal)?;
    let mut events = attach_categories(&state, events)
        .await?
        .into_iter()
        .map(|event| (event.id.to_owned(), event))
        .collect::<std::collections::HashMap<_, _>>();

    let items = rsvps
        .into_iter()
        .filter_map(|rsvp| {
            let event = events.remove(&rsvp.event_id)?;
            Some(MyRsvpItem {
                rsvp: rsvp.into(),
                event,
            })
        })
        .collect();

    Ok(Json(items))
}
