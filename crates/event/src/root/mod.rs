use std::ops::Deref;

use crate::{EventRow, repository};

mod archive;
mod category;
mod create;
mod delete;
mod favorite;
mod moderate;
mod rsvp;
mod submit;
mod update;

pub use category::CreateCategoryInput;
pub use create::CreateEventInput;
pub use moderate::RejectEventInput;
pub use rsvp::SetRsvpInput;
pub use update::UpdateEventInput;

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

    pub async fn load(&self, id: impl Into<String>) -> afisha_shared::Result<Option<EventRow>> {
        repository::find_event(&self.read_db, id).await
    }
}
