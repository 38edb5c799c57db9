pub mod auth;
pub mod cli;
pub mod config;
pub mod db;
pub mod email;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod routes;

pub use routes::AppState;

use sqlx::SqlitePool;

/// Build the application state on top of existing pools. The CLI server
/// uses a write/read pool pair; tests pass the same pool twice.
pub fn build_state(
    config: config::Config,
    read_db: SqlitePool,
    write_db: SqlitePool,
    email: email::EmailService,
) -> AppState {
    let state = afisha_shared::State {
        read_db: read_db.clone(),
        write_db,
    };

    AppState {
        config,
        user: afisha_user::Command::new(state.clone()),
        event: afisha_event::Command::new(state.clone()),
        organizer: afisha_organizer::Command::new(state.clone()),
        support: afisha_support::Command::new(state.clone()),
        user_query: afisha_user::Query(read_db.clone()),
        event_query: afisha_event::Query(read_db.clone()),
        organizer_query: afisha_organizer::Query(read_db.clone()),
        support_query: afisha_support::Query(read_db.clone()),
        email,
        pool: read_db,
    }
}

/// Create the app router for testing, with a mock email service and a
/// single shared pool.
pub fn create_app(config: config::Config, pool: SqlitePool) -> anyhow::Result<axum::Router> {
    let email = email::EmailService::new_mock(&config.email)?;
    let state = build_state(config, pool.clone(), pool, email);

    Ok(routes::router(state))
}
