use afisha_shared::Actor;
use serde::Deserialize;
use sqlx::types::Text;
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

use crate::{OrganizerRequestRow, Status, repository};

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequestInput {
    #[validate(length(min = 10, max = 2000))]
    pub message: String,
}

impl super::Command {
    /// Files an application for the organizer role. A user may hold at most
    /// one pending request at a time.
    pub async fn submit(
        &self,
        actor: &Actor,
        input: SubmitRequestInput,
    ) -> afisha_shared::Result<OrganizerRequestRow> {
        if actor.role.can_organize() {
            afisha_shared::bad_request!("account already has organizer rights");
        }

        input.validate()?;

        if repository::has_pending(&self.read_db, &actor.id).await? {
            afisha_shared::conflict!("a pending request already exists, wait for a decision");
        }

        let row = OrganizerRequestRow {
            id: Ulid::new().to_string(),
            user_id: actor.id.to_owned(),
            status: Text(Status::Pending),
            message: input.message.trim().to_owned(),
            admin_comment: None,
            created_at: OffsetDateTime::now_utc().unix_timestamp(),
            resolved_at: None,
        };

        repository::insert(&self.write_db, &row).await?;

        tracing::info!(request_id = %row.id, user_id = %actor.id, "organizer request created");

        Ok(row)
    }
}
