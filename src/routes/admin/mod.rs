pub mod events;
pub mod organizer_requests;
pub mod support;
pub mod users;
