mod repository;
mod root;
mod types;

pub mod query;

pub use query::{FeedFilter, Query, RsvpStats};
pub use repository::{CategoryRow, EventRow, RsvpRow};
pub use root::*;
pub use types::*;
