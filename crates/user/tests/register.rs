use afisha_shared::{Error, user::Role};
use afisha_user::Command;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_register_creates_regular_user() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state);

    let user = command.register(helpers::register_input("john.doe")).await?;

    assert_eq!(user.role.0, Role::User);
    assert!(!user.blocked);
    // never stored in the clear
    assert_ne!(user.password, "my_password");

    let stored = command.load(&user.id).await?.unwrap();
    assert_eq!(stored.email, "john.doe@afisha.localhost");

    Ok(())
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state);

    command.register(helpers::register_input("john.doe")).await?;
    let err = command
        .register(helpers::register_input("john.doe"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Conflict(_)));

    Ok(())
}

#[tokio::test]
async fn test_register_validates_input() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_state(dir.child("db.sqlite3")).await?;
    let command = Command::new(state);

    let err = command
        .register(afisha_user::RegisterInput {
            email: "not-an-email".to_owned(),
            password: "short".to_owned(),
            full_name: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Validate(_)));

    Ok(())
}
