use afisha_db::table::User;
use afisha_shared::{Actor, user::Role};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use sqlx::types::Text;
use time::OffsetDateTime;
use validator::Validate;

use crate::{OrganizerRequestRow, Status, repository};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct DecideRequestInput {
    #[validate(length(min = 3, max = 2000))]
    pub comment: Option<String>,
}

impl super::Command {
    /// Approves a pending request: the request status and the requester's
    /// role change in one transaction, so the outcome is both-or-neither.
    pub async fn approve(
        &self,
        actor: &Actor,
        id: impl Into<String>,
        input: DecideRequestInput,
    ) -> afisha_shared::Result<OrganizerRequestRow> {
        if !actor.is_admin() {
            afisha_shared::forbidden!("admin role required");
        }

        input.validate()?;

        let Some(mut request) = self.load(id).await? else {
            afisha_shared::not_found!("organizer request not found");
        };

        if request.status.0 != Status::Pending {
            afisha_shared::conflict!("only pending requests can be approved");
        }

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let comment = input
            .comment
            .map(|comment| comment.trim().to_owned())
            .filter(|comment| !comment.is_empty())
            .unwrap_or_else(|| "approved".to_owned());

        let mut tx = self.write_db.begin().await?;

        let (sql, values) = repository::decide_statement(&request.id, Status::Approved, &comment, now);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let (sql, values) = Query::update()
            .table(User::Table)
            .values([
                (User::Role, Role::Organizer.to_string().into()),
                (User::UpdatedAt, now.into()),
            ])
            .and_where(Expr::col(User::Id).eq(request.user_id.to_owned()))
            .build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        tx.commit().await?;

        tracing::info!(request_id = %request.id, user_id = %request.user_id, "organizer request approved");

        request.status = Text(Status::Approved);
        request.admin_comment = Some(comment);
        request.resolved_at = Some(now);

        Ok(request)
    }

    /// Rejects a pending request with a mandatory comment. The requester's
    /// role is untouched.
    pub async fn reject(
        &self,
        actor: &Actor,
        id: impl Into<String>,
        input: DecideRequestInput,
    ) -> afisha_shared::Result<OrganizerRequestRow> {
        if !actor.is_admin() {
            afisha_shared::forbidden!("admin role required");
        }

        input.validate()?;

        let Some(comment) = input
            .comment
            .map(|comment| comment.trim().to_owned())
            .filter(|comment| !comment.is_empty())
        else {
            afisha_shared::bad_request!("a comment is required to reject a request");
        };

        let Some(mut request) = self.load(id).await? else {
            afisha_shared::not_found!("organizer request not found");
        };

        if request.status.0 != Status::Pending {
            afisha_shared::conflict!("only pending requests can be rejected");
        }

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let (sql, values) = repository::decide_statement(&request.id, Status::Rejected, &comment, now);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        tracing::info!(request_id = %request.id, "organizer request rejected");

        request.status = Text(Status::Rejected);
        request.admin_comment = Some(comment);
        request.resolved_at = Some(now);

        Ok(request)
    }
}
