use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Draft,
    PendingModeration,
    Published,
    Rejected,
    Archived,
}

impl Status {
    /// Transition graph of the moderation workflow. Every mutation that
    /// changes an event's status must pass through this check; anything
    /// outside the graph is rejected as an invalid transition.
    pub fn allows(self, next: Status) -> bool {
        matches!(
            (self, next),
            (Status::Draft, Status::PendingModeration)
                | (Status::Rejected, Status::PendingModeration)
                | (Status::PendingModeration, Status::Published)
                | (Status::PendingModeration, Status::Rejected)
                | (Status::Published, Status::Archived)
        )
    }

    /// Organizers may edit or delete their event only before it enters
    /// moderation or after it came back rejected.
    pub fn editable_by_owner(self) -> bool {
        matches!(self, Status::Draft | Status::Rejected)
    }

    pub fn deletable_by_owner(self) -> bool {
        matches!(self, Status::Draft | Status::Rejected | Status::Archived)
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    Going,
    #[default]
    Interested,
    Canceled,
}
