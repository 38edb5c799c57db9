use afisha_shared::Actor;
use sqlx::types::Text;
use time::OffsetDateTime;

use crate::{EventRow, Status, repository};

impl super::Command {
    /// Takes a published event off the public feed. Allowed for the owning
    /// organizer and for admins; the moderation comment is kept.
    pub async fn archive(
        &self,
        actor: &Actor,
        id: impl Into<String>,
    ) -> afisha_shared::Result<EventRow> {
        let Some(mut event) = self.load(id).await? else {
            afisha_shared::not_found!("event not found");
        };

        if !actor.can_manage(&event.organizer_id) {
            afisha_shared::forbidden!("cannot archive another organizer's event");
        }

        if !event.status.0.allows(Status::Archived) {
            afisha_shared::conflict!(
                "cannot archive an event in status {}",
                event.status.0
            );
        }

        let now = OffsetDateTime::now_utc().unix_timestamp();
        repository::set_event_status(
            &self.write_db,
            &event.id,
            Status::Archived,
            event.moderation_comment.to_owned(),
            now,
        )
        .await?;

        event.status = Text(Status::Archived);
        event.updated_at = now;

        Ok(event)
    }
}
