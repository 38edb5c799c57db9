use afisha_shared::Actor;
use sqlx::types::Text;
use time::OffsetDateTime;

use crate::{Status, SupportTicketRow, repository};

impl super::Command {
    pub async fn close(
        &self,
        actor: &Actor,
        id: impl Into<String>,
    ) -> afisha_shared::Result<SupportTicketRow> {
        if !actor.is_admin() {
            afisha_shared::forbidden!("admin role required");
        }

        let Some(mut ticket) = self.load(id).await? else {
            afisha_shared::not_found!("support ticket not found");
        };

        if ticket.status.0 == Status::Closed {
            return Ok(ticket);
        }

        let now = OffsetDateTime::now_utc().unix_timestamp();
        repository::set_status(&self.write_db, &ticket.id, Status::Closed, None, now).await?;

        tracing::info!(ticket_id = %ticket.id, "support ticket closed");

        ticket.status = Text(Status::Closed);
        ticket.updated_at = now;

        Ok(ticket)
    }

    pub async fn delete(&self, actor: &Actor, id: impl Into<String>) -> afisha_shared::Result<()> {
        if !actor.is_admin() {
            afisha_shared::forbidden!("admin role required");
        }

        let Some(ticket) = self.load(id).await? else {
            afisha_shared::not_found!("support ticket not found");
        };

        repository::delete(&self.write_db, &ticket.id).await
    }
}
