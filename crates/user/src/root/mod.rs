use std::ops::Deref;

use crate::{UserRow, repository};

mod admin;
mod login;
mod profile;
mod register;

pub use admin::{SetBlockedInput, SetRoleInput};
pub use login::LoginInput;
pub use profile::UpdateProfileInput;
pub use register::RegisterInput;

#[derive(Clone)]
pub struct Command(afisha_shared::State);

impl Deref for Command {
    type Target = afisha_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub fn new(state: afisha_shared::State) -> Self {
        Self(state)
    }

    pub async fn load(&self, id: impl Into<String>) -> afisha_shared::Result<Option<UserRow>> {
        repository::find(&self.read_db, repository::FindType::Id(id.into())).await
    }

    pub async fn find_by_email(
        &self,
        email: impl Into<String>,
    ) -> afisha_shared::Result<Option<UserRow>> {
        repository::find(&self.read_db, repository::FindType::Email(email.into())).await
    }
}
