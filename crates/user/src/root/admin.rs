use afisha_shared::{Actor, user::Role};
use serde::Deserialize;
use sqlx::types::Text;
use time::OffsetDateTime;

use crate::{UserRow, repository};

#[derive(Debug, Deserialize)]
pub struct SetRoleInput {
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct SetBlockedInput {
    pub blocked: bool,
}

impl super::Command {
    /// Admin-only role change. Admins cannot change their own role through
    /// this operation.
    pub async fn set_role(
        &self,
        actor: &Actor,
        user_id: impl Into<String>,
        role: Role,
    ) -> afisha_shared::Result<UserRow> {
        if !actor.is_admin() {
            afisha_shared::forbidden!("admin role required");
        }

        let user_id = user_id.into();
        if actor.id == user_id {
            afisha_shared::conflict!("cannot change your own role");
        }

        let Some(mut user) = self.load(&user_id).await? else {
            afisha_shared::not_found!("user not found");
        };

        if user.role.0 == role {
            return Ok(user);
        }

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let mut update = repository::UpdateInput::new(&user_id, now);
        update.role = Some(role);
        repository::update(&self.write_db, update).await?;

        tracing::info!(user_id = %user_id, from = %user.role.0, to = %role, "user role changed");

        user.role = Text(role);
        user.updated_at = now;

        Ok(user)
    }

    /// Admin-only block/unblock. A blocked account fails every guarded
    /// operation, whatever its role.
    pub async fn set_blocked(
        &self,
        actor: &Actor,
        user_id: impl Into<String>,
        blocked: bool,
    ) -> afisha_shared::Result<UserRow> {
        if !actor.is_admin() {
            afisha_shared::forbidden!("admin role required");
        }

        let user_id = user_id.into();
        let Some(mut user) = self.load(&user_id).await? else {
            afisha_shared::not_found!("user not found");
        };

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let mut update = repository::UpdateInput::new(&user_id, now);
        update.blocked = Some(blocked);
        repository::update(&self.write_db, update).await?;

        tracing::info!(user_id = %user_id, blocked, "user block flag changed");

        user.blocked = blocked;
        user.updated_at = now;

        Ok(user)
    }
}
