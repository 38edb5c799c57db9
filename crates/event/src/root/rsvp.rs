use afisha_shared::Actor;
use serde::Deserialize;
use sqlx::types::Text;
use time::OffsetDateTime;
use ulid::Ulid;

use crate::{RsvpRow, RsvpStatus, Status, repository};

#[derive(Debug, Deserialize)]
pub struct SetRsvpInput {
    pub status: RsvpStatus,
}

impl super::Command {
    /// Upserts the caller's RSVP on a published event. A repeated call
    /// overwrites the previous status; exactly one row exists per
    /// (user, event) pair.
    pub async fn set_rsvp(
        &self,
        actor: &Actor,
        event_id: impl Into<String>,
        status: RsvpStatus,
    ) -> afisha_shared::Result<RsvpRow> {
        let event_id = event_id.into();

        let Some(event) = self.load(&event_id).await? else {
            afisha_shared::not_found!("event not found or not published");
        };

        if event.status.0 != Status::Published {
            afisha_shared::not_found!("event not found or not published");
        }

        let now = OffsetDateTime::now_utc().unix_timestamp();

        match repository::find_rsvp(&self.read_db, &actor.id, &event_id).await? {
            Some(mut rsvp) => {
                repository::update_rsvp_status(&self.write_db, &rsvp.id, status, now).await?;
                rsvp.status = Text(status);
                rsvp.updated_at = now;

                Ok(rsvp)
            }
            None => {
                let row = RsvpRow {
                    id: Ulid::new().to_string(),
                    user_id: actor.id.to_owned(),
                    event_id,
                    status: Text(status),
                    created_at: now,
                    updated_at: now,
                };
                repository::insert_rsvp(&self.write_db, &row).await?;

                Ok(row)
            }
        }
    }
}
