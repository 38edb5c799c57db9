use afisha_event::{Command, Query};
use afisha_shared::user::Role;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_favorite_add_and_remove_are_idempotent() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_state(dir.child("db.sqlite3")).await?;
    let admin = helpers::create_user(&state, "admin", Role::Admin).await?;
    let organizer = helpers::create_user(&state, "org", Role::Organizer).await?;
    let visitor = helpers::create_user(&state, "visitor", Role::User).await?;
    let category_id = helpers::create_category(&state, &admin).await?;
    let event =
        helpers::create_published_event(&state, &organizer, &admin, &category_id).await?;

    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());

    command.add_favorite(&visitor, &event.id).await?;
    command.add_favorite(&visitor, &event.id).await?;

    assert!(query.is_favorite(&visitor.id, &event.id).await?);
    assert_eq!(query.favorites_of(&visitor.id).await?.len(), 1);

    command.remove_favorite(&visitor, &event.id).await?;
    assert!(!query.is_favorite(&visitor.id, &event.id).await?);

    // removing again is a no-op, not an error
    command.remove_favorite(&visitor, &event.id).await?;

    Ok(())
}

#[tokio::test]
async fn test_archived_favorites_drop_out_of_the_listing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_state(dir.child("db.sqlite3")).await?;
    let admin = helpers::create_user(&state, "admin", Role::Admin).await?;
    let organizer = helpers::create_user(&state, "org", Role::Organizer).await?;
    let visitor = helpers::create_user(&state, "visitor", Role::User).await?;
    let category_id = helpers::create_category(&state, &admin).await?;
    let event =
        helpers::create_published_event(&state, &organizer, &admin, &category_id).await?;

    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());

    command.add_favorite(&visitor, &event.id).await?;
    command.archive(&organizer, &event.id).await?;

    // the favorite row survives, the listing shows published events only
    assert!(query.is_favorite(&visitor.id, &event.id).await?);
    assert!(query.favorites_of(&visitor.id).await?.is_empty());

    Ok(())
}
