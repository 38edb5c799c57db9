use afisha_shared::user::Role;
use axum::http::StatusCode;
use temp_dir::TempDir;

mod common;

#[tokio::test]
async fn test_register_login_me() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, _pool) = common::setup(dir.child("db.sqlite3")).await?;

    let (status, user) = common::request(
        &app,
        "POST",
        "/auth/register",
        None,
        Some(serde_json::json!({
            "email": "john.doe@afisha.localhost",
            "password": "my_password",
            "full_name": "John Doe",
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(user["role"], "user");
    assert!(user.get("password").is_none());

    let (status, token) = common::request(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({
            "email": "john.doe@afisha.localhost",
            "password": "my_password",
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(token["token_type"], "bearer");

    let bearer = token["access_token"].as_str().unwrap();
    let (status, me) = common::request(&app, "GET", "/users/me", Some(bearer), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["email"], "john.doe@afisha.localhost");
    assert_eq!(me["full_name"], "John Doe");

    Ok(())
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, pool) = common::setup(dir.child("db.sqlite3")).await?;

    common::register_and_login(&app, &pool, "john.doe", Role::User).await?;

    let (status, _) = common::request(
        &app,
        "POST",
        "/auth/register",
        None,
        Some(serde_json::json!({
            "email": "john.doe@afisha.localhost",
            "password": "my_password",
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
async fn test_login_rejects_bad_password_and_blocked_account() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, pool) = common::setup(dir.child("db.sqlite3")).await?;

    let (id, _token) = common::register_and_login(&app, &pool, "john.doe", Role::User).await?;

    let (status, _) = common::request(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({
            "email": "john.doe@afisha.localhost",
            "password": "wrong_password",
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    common::set_blocked(&pool, &id, true).await?;

    let (status, _) = common::request(
        &app,
        "POST",
        "/auth/login",
        None,
        Some(serde_json::json!({
            "email": "john.doe@afisha.localhost",
            "password": "my_password",
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
async fn test_profile_update() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, pool) = common::setup(dir.child("db.sqlite3")).await?;

    let (_id, token) = common::register_and_login(&app, &pool, "john.doe", Role::User).await?;

    let (status, me) = common::request(
        &app,
        "PUT",
        "/users/me",
        Some(&token),
        Some(serde_json::json!({
            "about": "jazz enjoyer",
            "telegram": "johndoe",
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["about"], "jazz enjoyer");
    assert_eq!(me["telegram"], "johndoe");

    Ok(())
}
