mod category;
mod event;
mod favorite;
mod organizer_request;
mod rsvp;
mod support_ticket;
mod user;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "afisha",
    "m0001",
    vec_box![],
    vec_box![
        user::CreateUserTable,
        user::CreateUserEmailIdx,
        category::CreateCategoryTable,
        category::CreateCategoryNameIdx,
        category::CreateCategorySlugIdx,
        event::CreateEventTable,
        event::CreateEventStatusIdx,
        event::CreateEventOrganizerIdx,
        event::CreateEventStartsAtIdx,
        rsvp::CreateRsvpTable,
        rsvp::CreateRsvpUserEventIdx,
        rsvp::CreateRsvpEventIdx,
        favorite::CreateFavoriteTable,
        favorite::CreateFavoriteUserEventIdx,
        organizer_request::CreateOrganizerRequestTable,
        organizer_request::CreateOrganizerRequestUserIdx,
        organizer_request::CreateOrganizerRequestStatusIdx,
        support_ticket::CreateSupportTicketTable,
        support_ticket::CreateSupportTicketUserIdx,
        support_ticket::CreateSupportTicketStatusIdx
    ]
);
