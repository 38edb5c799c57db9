mod repository;
mod root;
mod types;

pub mod query;

pub use query::Query;
pub use repository::SupportTicketRow;
pub use root::*;
pub use types::*;
