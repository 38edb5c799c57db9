mod category;
mod favorite;
mod feed;
mod mine;
mod rsvp;

pub use feed::FeedFilter;
pub use rsvp::RsvpStats;

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);
