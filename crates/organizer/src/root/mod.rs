use std::ops::Deref;

use crate::{OrganizerRequestRow, repository};

mod decide;
mod submit;

pub use decide::DecideRequestInput;
pub use submit::SubmitRequestInput;

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

    pub async fn load(
        &self,
        id: impl Into<String>,
    ) -> afisha_shared::Result<Option<OrganizerRequestRow>> {
        repository::find(&self.read_db, id).await
    }
}
