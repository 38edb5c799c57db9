use afisha_shared::Actor;
use sqlx::types::Text;
use time::OffsetDateTime;

use crate::{EventRow, Status, repository};

impl super::Command {
    /// Sends a draft or rejected event to moderation. Clears any previous
    /// moderation comment so the reviewer starts from a clean slate.
    pub async fn submit(
        &self,
        actor: &Actor,
        id: impl Into<String>,
    ) -> afisha_shared::Result<EventRow> {
        let Some(mut event) = self.load(id).await? else {
            afisha_shared::not_found!("event not found");
        };

        if !actor.can_manage(&event.organizer_id) {
            afisha_shared::forbidden!("cannot submit another organizer's event");
        }

        if !event.status.0.allows(Status::PendingModeration) {
            afisha_shared::conflict!(
                "cannot submit an event in status {}",
                event.status.0
            );
        }

        validate_for_submission(&event)?;

        let now = OffsetDateTime::now_utc().unix_timestamp();
        repository::set_event_status(
            &self.write_db,
            &event.id,
            Status::PendingModeration,
            None,
            now,
        )
        .await?;

        event.status = Text(Status::PendingModeration);
        event.moderation_comment = None;
        event.updated_at = now;

        Ok(event)
    }
}

/// Required-field gate for moderation: the stored row must carry everything
/// a reviewer and the public feed need.
fn validate_for_submission(event: &EventRow) -> afisha_shared::Result<()> {
    if event.title.trim().len() < 3 {
        afisha_shared::bad_request!("title is required before submission");
    }

    if event.starts_at <= 0 {
        afisha_shared::bad_request!("start time is required before submission");
    }

    if !(-90.0..=90.0).contains(&event.latitude) || !(-180.0..=180.0).contains(&event.longitude) {
        afisha_shared::bad_request!("coordinates are out of range");
    }

    Ok(())
}
