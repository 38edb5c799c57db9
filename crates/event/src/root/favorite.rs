use afisha_shared::Actor;
use time::OffsetDateTime;
use ulid::Ulid;

use crate::{Status, repository};

impl super::Command {
    /// Adds a published event to the caller's favorites. Adding an event
    /// that is already a favorite is a no-op.
    pub async fn add_favorite(
        &self,
        actor: &Actor,
        event_id: impl Into<String>,
    ) -> afisha_shared::Result<()> {
        let event_id = event_id.into();

        let Some(event) = self.load(&event_id).await? else {
            afisha_shared::not_found!("event not found or not published");
        };

        if event.status.0 != Status::Published {
            afisha_shared::not_found!("event not found or not published");
        }

        if repository::favorite_exists(&self.read_db, &actor.id, &event_id).await? {
            return Ok(());
        }

        let now = OffsetDateTime::now_utc().unix_timestamp();
        repository::insert_favorite(
            &self.write_db,
            &Ulid::new().to_string(),
            &actor.id,
            &event_id,
            now,
        )
        .await
    }

    /// Removes an event from the caller's favorites. Removing an absent
    /// favorite is a no-op, not an error.
    pub async fn remove_favorite(
        &self,
        actor: &Actor,
        event_id: impl Into<String>,
    ) -> afisha_shared::Result<()> {
        repository::delete_favorite(&self.write_db, &actor.id, &event_id.into()).await
    }
}
