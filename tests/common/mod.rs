use std::{path::PathBuf, str::FromStr};

use afisha::config::{
    Config, DatabaseConfig, EmailConfig, JwtConfig, ObservabilityConfig, ServerConfig,
};
use afisha_shared::{Actor, user::Role};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: "test-secret-key-at-least-32-bytes!!".to_string(),
            expiration_minutes: 60,
        },
        email: EmailConfig::default(),
        observability: ObservabilityConfig::default(),
    }
}

pub async fn setup(path: PathBuf) -> anyhow::Result<(Router, SqlitePool)> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    afisha_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;
    drop(conn);

    let app = afisha::create_app(test_config(), pool.clone())?;

    Ok((app, pool))
}

pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app
        .clone()
        .oneshot(request)
        .await
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}

/// Registers an account over HTTP, optionally promotes it, and returns
/// (user id, bearer token).
pub async fn register_and_login(
    app: &Router,
    pool: &SqlitePool,
    name: &str,
    role: Role,
) -> anyhow::Result<(String, String)> {
    let (status, user) = request(
        app,
        "POST",
        "/auth/register",
        None,
        Some(serde_json::json!({
            "email": format!("{name}@afisha.localhost"),
            "password": "my_password",
        })),
    )
    .await?;
    anyhow::ensure!(status == StatusCode::CREATED, "register failed: {user}");

    let id = user["id"].as_str().unwrap().to_owned();

    if role != Role::User {
        set_role(pool, &id, role).await?;
    }

    let (status, token) = request(
        app,
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({
            "email": format!("{name}@afisha.localhost"),
            "password": "my_password",
        })),
    )
    .await?;
    anyhow::ensure!(status == StatusCode::OK, "login failed: {token}");

    Ok((id, token["access_token"].as_str().unwrap().to_owned()))
}

pub async fn set_role(pool: &SqlitePool, user_id: &str, role: Role) -> anyhow::Result<()> {
    let state = afisha_shared::State {
        read_db: pool.clone(),
        write_db: pool.clone(),
    };
    let command = afisha_user::Command::new(state);
    let operator = Actor::new("system", Role::Admin);
    command.set_role(&operator, user_id, role).await?;

    Ok(())
}

#[allow(dead_code)]
pub async fn set_blocked(pool: &SqlitePool, user_id: &str, blocked: bool) -> anyhow::Result<()> {
    let state = afisha_shared::State {
        read_db: pool.clone(),
        write_db: pool.clone(),
    };
    let command = afisha_user::Command::new(state);
    let operator = Actor::new("system", Role::Admin);
    command.set_blocked(&operator, user_id, blocked).await?;

    Ok(())
}

#[allow(dead_code)]
pub async fn create_category(app: &Router, admin_token: &str) -> anyhow::Result<String> {
    let (status, category) = request(
        app,
        "POST",
        "/categories",
        Some(admin_token),
        Some(serde_json::json!({
            "name": "Concerts",
            "slug": "concerts",
        })),
    )
    .await?;
    anyhow::ensure!(status == StatusCode::CREATED, "category failed: {category}");

    Ok(category["id"].as_str().unwrap().to_owned())
}

#[allow(dead_code)]
pub fn event_body(category_id: &str) -> Value {
    serde_json::json!({
        "title": "Jazz evening",
        "description": "Live jazz in the park",
        "category_id": category_id,
        "starts_at": 1_900_000_000i64,
        "latitude": 55.75,
        "longitude": 37.61,
        "is_free": true,
        "capacity": 100,
    })
}
