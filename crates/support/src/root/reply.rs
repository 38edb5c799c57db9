use afisha_shared::Actor;
use serde::Deserialize;
use sqlx::types::Text;
use time::OffsetDateTime;
use validator::Validate;

use crate::{Status, SupportTicketRow, repository};

#[derive(Debug, Deserialize, Validate)]
pub struct ReplyTicketInput {
    #[validate(length(min = 3, max = 5000))]
    pub reply: String,
}

impl super::Command {
    /// Records an admin answer on the ticket and marks it answered.
    pub async fn reply(
        &self,
        actor: &Actor,
        id: impl Into<String>,
        input: ReplyTicketInput,
    ) -> afisha_shared::Result<SupportTicketRow> {
        if !actor.is_admin() {
            afisha_shared::forbidden!("admin role required");
        }

        input.validate()?;

        let Some(mut ticket) = self.load(id).await? else {
            afisha_shared::not_found!("support ticket not found");
        };

        if ticket.status.0 == Status::Closed {
            afisha_shared::conflict!("cannot reply to a closed ticket");
        }

        let reply = input.reply.trim().to_owned();
        let now = OffsetDateTime::now_utc().unix_timestamp();
        repository::set_status(
            &self.write_db,
            &ticket.id,
            Status::Answered,
            Some(reply.to_owned()),
            now,
        )
        .await?;

        tracing::info!(ticket_id = %ticket.id, "support ticket answered");

        ticket.status = Text(Status::Answered);
        ticket.admin_reply = Some(reply);
        ticket.updated_at = now;

        Ok(ticket)
    }
}
