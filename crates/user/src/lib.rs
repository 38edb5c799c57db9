mod repository;
mod root;

pub mod query;

pub use query::{Query, UserFilter};
pub use repository::UserRow;
pub use root::*;
