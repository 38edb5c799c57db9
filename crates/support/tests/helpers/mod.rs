use std::{path::PathBuf, str::FromStr};

use afisha_shared::{Actor, State, user::Role};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    afisha_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;
    drop(conn);

    Ok(State {
        read_db: pool.clone(),
        write_db: pool,
    })
}

pub async fn create_user(state: &State, name: &str) -> anyhow::Result<Actor> {
    let command = afisha_user::Command::new(state.clone());
    let user = command
        .register(afisha_user::RegisterInput {
            email: format!("{name}@afisha.localhost"),
            password: "my_password".to_owned(),
            full_name: None,
        })
        .await?;

    Ok(Actor::new(user.id, Role::User))
}

#[allow(dead_code)]
pub fn ticket_input() -> afisha_support::OpenTicketInput {
    afisha_support::OpenTicketInput {
        subject: "Cannot find my RSVP".to_owned(),
        message: "I marked an event as going but it is missing from my list".to_owned(),
    }
}
