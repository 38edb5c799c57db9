use afisha_shared::Actor;
use serde::Deserialize;
use sqlx::types::Text;
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

use crate::{Status, SupportTicketRow, repository};

#[derive(Debug, Deserialize, Validate)]
pub struct OpenTicketInput {
    #[validate(length(min = 3, max = 255))]
    pub subject: String,
    #[validate(length(min = 10, max = 5000))]
    pub message: String,
}

impl super::Command {
    pub async fn open(
        &self,
        actor: &Actor,
        input: OpenTicketInput,
    ) -> afisha_shared::Result<SupportTicketRow> {
        input.validate()?;

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let row = SupportTicketRow {
            id: Ulid::new().to_string(),
            user_id: actor.id.to_owned(),
            subject: input.subject,
            message: input.message,
            status: Text(Status::Open),
            admin_reply: None,
            created_at: now,
            updated_at: now,
        };

        repository::insert(&self.write_db, &row).await?;

        Ok(row)
    }
}
