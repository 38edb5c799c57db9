use afisha_shared::Actor;
use serde::Deserialize;
use sqlx::types::Text;
use time::OffsetDateTime;
use validator::Validate;

use crate::{EventRow, Status, repository};

#[derive(Debug, Deserialize, Validate)]
pub struct RejectEventInput {
    #[validate(length(min = 1, max = 2000))]
    pub comment: String,
}

impl super::Command {
    /// Publishes an event under moderation, making it visible to the public
    /// feed and map queries.
    pub async fn publish(
        &self,
        actor: &Actor,
        id: impl Into<String>,
    ) -> afisha_shared::Result<EventRow> {
        if !actor.is_admin() {
            afisha_shared::forbidden!("admin role required");
        }

        let Some(mut event) = self.load(id).await? else {
            afisha_shared::not_found!("event not found");
        };

        if !event.status.0.allows(Status::Published) {
            afisha_shared::conflict!(
                "cannot publish an event in status {}",
                event.status.0
            );
        }

        let now = OffsetDateTime::now_utc().unix_timestamp();
        repository::set_event_status(&self.write_db, &event.id, Status::Published, None, now)
            .await?;

        event.status = Text(Status::Published);
        event.moderation_comment = None;
        event.updated_at = now;

        Ok(event)
    }

    /// Rejects an event under moderation. The comment is mandatory and is
    /// shown to the organizer alongside the rejected event.
    pub async fn reject(
        &self,
        actor: &Actor,
        id: impl Into<String>,
        input: RejectEventInput,
    ) -> afisha_shared::Result<EventRow> {
        if !actor.is_admin() {
            afisha_shared::forbidden!("admin role required");
        }

        input.validate()?;

        let comment = input.comment.trim().to_owned();
        if comment.is_empty() {
            afisha_shared::bad_request!("a moderation comment is required to reject an event");
        }

        let Some(mut event) = self.load(id).await? else {
            afisha_shared::not_found!("event not found");
        };

        if !event.status.0.allows(Status::Rejected) {
            afisha_shared::conflict!(
                "cannot reject an event in status {}",
                event.status.0
            );
        }

        let now = OffsetDateTime::now_utc().unix_timestamp();
        repository::set_event_status(
            &self.write_db,
            &event.id,
            Status::Rejected,
            Some(comment.to_owned()),
            now,
        )
        .await?;

        event.status = Text(Status::Rejected);
        event.moderation_comment = Some(comment);
        event.updated_at = now;

        Ok(event)
    }
}
