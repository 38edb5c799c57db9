use std::{path::PathBuf, str::FromStr};

use afisha_shared::State;
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

#[allow(dead_code)]
pub fn register_input(name: &str) -> afisha_user::RegisterInput {
    afisha_user::RegisterInput {
        email: format!("{name}@afisha.localhost"),
        password: "my_password".to_owned(),
        full_name: Some("John Doe".to_owned()),
    }
}
