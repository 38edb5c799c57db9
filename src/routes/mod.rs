use axum::{
    Router,
    routing::{get, post, put},
};
use sqlx::SqlitePool;

use crate::email::EmailService;
use crate::middleware::{admin_middleware, auth_middleware};

pub mod admin;
mod auth;
mod categories;
mod events;
mod favorites;
mod health;
mod organizer_requests;
mod rsvp;
mod support;
mod users;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub user: afisha_user::Command,
    pub event: afisha_event::Command,
    pub organizer: afisha_organizer::Command,
    pub support: afisha_support::Command,
    pub user_query: afisha_user::Query,
    pub event_query: afisha_event::Query,
    pub organizer_query: afisha_organizer::Query,
    pub support_query: afisha_support::Query,
    pub email: EmailService,
    pub pool: SqlitePool,
}

pub fn router(app_state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/admin/events", get(admin::events::list))
        .route("/admin/events/{id}/publish", post(admin::events::publish))
        .route("/admin/events/{id}/reject", post(admin::events::reject))
        .route("/admin/events/{id}", axum::routing::delete(admin::events::delete))
        .route("/admin/users", get(admin::users::list))
        .route("/admin/users/{id}/role", axum::routing::patch(admin::users::set_role))
        .route("/admin/users/{id}/block", axum::routing::patch(admin::users::set_blocked))
        .route("/admin/organizer-requests", get(admin::organizer_requests::list))
        .route(
            "/admin/organizer-requests/{id}/approve",
            post(admin::organizer_requests::approve),
        )
        .route(
            "/admin/organizer-requests/{id}/reject",
            post(admin::organizer_requests::reject),
        )
        .route("/admin/support-tickets", get(admin::support::list))
        .route("/admin/support-tickets/{id}/reply", post(admin::support::reply))
        .route("/admin/support-tickets/{id}/close", post(admin::support::close))
        .route(
            "/admin/support-tickets/{id}",
            axum::routing::delete(admin::support::delete),
        )
        .route_layer(axum::middleware::from_fn(admin_middleware));

    let protected_routes = Router::new()
        .route("/users/me", get(users::me).put(users::update_me))
        .route("/categories", post(categories::create))
        .route("/events", post(events::create))
        .route("/events/my", get(events::mine))
        .route("/events/{id}/manage", get(events::manage))
        .route("/events/{id}", put(events::update).delete(events::delete))
        .route("/events/{id}/submit", post(events::submit))
        .route("/events/{id}/archive", post(events::archive))
        .route("/events/{id}/rsvp", put(rsvp::set))
        .route("/events/{id}/rsvp/my", get(rsvp::my))
        .route("/events/{id}/rsvp/list", get(rsvp::list_for_event))
        .route("/rsvp/my", get(rsvp::mine))
        .route("/favorites", get(favorites::list))
        .route(
            "/favorites/{event_id}",
            get(favorites::check)
                .post(favorites::add)
                .delete(favorites::remove),
        )
        .route("/organizer-requests", post(organizer_requests::create))
        .route("/organizer-requests/my", get(organizer_requests::mine))
        .route("/support-tickets", post(support::create))
        .route("/support-tickets/my", get(support::mine))
        .merge(admin_routes)
        .route_layer(axum::middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    Router::new()
        // Health check endpoints (no auth required)
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .merge(
            Router::new()
                // Public API
                .route("/auth/register", post(auth::register))
                .route("/auth/login", post(auth::login))
                .route("/categories", get(categories::list))
                .route("/events", get(events::feed))
                .route("/events/{id}", get(events::detail))
                .route("/events/{id}/rsvp/stats", get(rsvp::stats))
                .merge(protected_routes)
                .with_state(app_state),
        )
}
