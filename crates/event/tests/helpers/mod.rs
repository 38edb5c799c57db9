use std::{path::PathBuf, str::FromStr};

use afisha_event::{Command, CreateCategoryInput, CreateEventInput, EventRow};
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

pub async fn create_user(state: &State, name: &str, role: Role) -> anyhow::Result<Actor> {
    let command = afisha_user::Command::new(state.clone());
    let user = command
        .register(afisha_user::RegisterInput {
            email: format!("{name}@afisha.localhost"),
            password: "my_password".to_owned(),
            full_name: None,
        })
        .await?;

    if role != Role::User {
        let operator = Actor::new("system", Role::Admin);
        command.set_role(&operator, &user.id, role).await?;
    }

    Ok(Actor::new(user.id, role))
}

pub async fn create_category(state: &State, admin: &Actor) -> anyhow::Result<String> {
    let command = Command::new(state.clone());
    let category = command
        .create_category(
            admin,
            CreateCategoryInput {
                name: "Concerts".to_owned(),
                slug: "concerts".to_owned(),
                description: None,
            },
        )
        .await?;

    Ok(category.id)
}

pub fn event_input(category_id: &str) -> CreateEventInput {
    CreateEventInput {
        title: "Jazz evening".to_owned(),
        description: Some("Live jazz in the park".to_owned()),
        category_id: category_id.to_owned(),
        starts_at: 1_900_000_000,
        ends_at: None,
        address_text: Some("Main square, 1".to_owned()),
        latitude: 55.75,
        longitude: 37.61,
        is_free: true,
        price_from: None,
        capacity: Some(100),
    }
}

#[allow(dead_code)]
pub async fn create_published_event(
    state: &State,
    organizer: &Actor,
    admin: &Actor,
    category_id: &str,
) -> anyhow::Result<EventRow> {
    let command = Command::new(state.clone());
    let event = command.create(organizer, event_input(category_id)).await?;
    command.submit(organizer, &event.id).await?;
    let event = command.publish(admin, &event.id).await?;

    Ok(event)
}
