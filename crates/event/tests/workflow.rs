use afisha_event::{Command, FeedFilter, Query, Status, UpdateEventInput};
use afisha_shared::{Error, user::Role};
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_moderation_round_trip() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_state(dir.child("db.sqlite3")).await?;
    let admin = helpers::create_user(&state, "admin", Role::Admin).await?;
    let organizer = helpers::create_user(&state, "org", Role::Organizer).await?;
    let category_id = helpers::create_category(&state, &admin).await?;

    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());

    let event = command
        .create(&organizer, helpers::event_input(&category_id))
        .await?;
    assert_eq!(event.status.0, Status::Draft);

    // draft -> pending_moderation
    let event = command.submit(&organizer, &event.id).await?;
    assert_eq!(event.status.0, Status::PendingModeration);

    // admin rejects with a comment the organizer can read back
    let event = command
        .reject(
            &admin,
            &event.id,
            afisha_event::RejectEventInput {
                comment: "missing address".to_owned(),
            },
        )
        .await?;
    assert_eq!(event.status.0, Status::Rejected);

    let stored = command.load(&event.id).await?.unwrap();
    assert_eq!(stored.moderation_comment.as_deref(), Some("missing address"));

    // resubmission clears the old comment
    let event = command.submit(&organizer, &event.id).await?;
    assert_eq!(event.status.0, Status::PendingModeration);
    assert_eq!(event.moderation_comment, None);

    // publish makes it visible in the public feed
    let event = command.publish(&admin, &event.id).await?;
    assert_eq!(event.status.0, Status::Published);

    let feed = query
        .feed(FeedFilter {
            limit: 20,
            ..Default::default()
        })
        .await?;
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0].id, event.id);
    assert!(query.find_published(&event.id).await?.is_some());

    Ok(())
}

#[tokio::test]
async fn test_publish_requires_pending_moderation() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_state(dir.child("db.sqlite3")).await?;
    let admin = helpers::create_user(&state, "admin", Role::Admin).await?;
    let organizer = helpers::create_user(&state, "org", Role::Organizer).await?;
    let category_id = helpers::create_category(&state, &admin).await?;

    let command = Command::new(state.clone());
    let event = command
        .create(&organizer, helpers::event_input(&category_id))
        .await?;

    // publishing a draft skips required review
    let err = command.publish(&admin, &event.id).await.unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));

    // published events cannot be published again
    command.submit(&organizer, &event.id).await?;
    command.publish(&admin, &event.id).await?;
    let err = command.publish(&admin, &event.id).await.unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));

    Ok(())
}

#[tokio::test]
async fn test_reject_requires_comment_and_pending_status() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_state(dir.child("db.sqlite3")).await?;
    let admin = helpers::create_user(&state, "admin", Role::Admin).await?;
    let organizer = helpers::create_user(&state, "org", Role::Organizer).await?;
    let category_id = helpers::create_category(&state, &admin).await?;

    let command = Command::new(state.clone());
    let event = command
        .create(&organizer, helpers::event_input(&category_id))
        .await?;
    command.submit(&organizer, &event.id).await?;

    let err = command
        .reject(
            &admin,
            &event.id,
            afisha_event::RejectEventInput {
                comment: "   ".to_owned(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::BadRequest(_)));

    command.publish(&admin, &event.id).await?;
    let err = command
        .reject(
            &admin,
            &event.id,
            afisha_event::RejectEventInput {
                comment: "too late".to_owned(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));

    Ok(())
}

#[tokio::test]
async fn test_moderation_is_admin_only() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_state(dir.child("db.sqlite3")).await?;
    let admin = helpers::create_user(&state, "admin", Role::Admin).await?;
    let organizer = helpers::create_user(&state, "org", Role::Organizer).await?;
    let category_id = helpers::create_category(&state, &admin).await?;

    let command = Command::new(state.clone());
    let event = command
        .create(&organizer, helpers::event_input(&category_id))
        .await?;
    command.submit(&organizer, &event.id).await?;

    let err = command.publish(&organizer, &event.id).await.unwrap_err();
    assert!(matches!(err, Error::Forbidden(_)));

    let err = command
        .reject(
            &organizer,
            &event.id,
            afisha_event::RejectEventInput {
                comment: "self-moderation".to_owned(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Forbidden(_)));

    Ok(())
}

#[tokio::test]
async fn test_ownership_guards() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_state(dir.child("db.sqlite3")).await?;
    let admin = helpers::create_user(&state, "admin", Role::Admin).await?;
    let organizer = helpers::create_user(&state, "org", Role::Organizer).await?;
    let other = helpers::create_user(&state, "other", Role::Organizer).await?;
    let category_id = helpers::create_category(&state, &admin).await?;

    let command = Command::new(state.clone());
    let event = command
        .create(&organizer, helpers::event_input(&category_id))
        .await?;

    let err = command.submit(&other, &event.id).await.unwrap_err();
    assert!(matches!(err, Error::Forbidden(_)));

    let err = command
        .update(&other, &event.id, UpdateEventInput::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Forbidden(_)));

    let err = command.delete(&other, &event.id).await.unwrap_err();
    assert!(matches!(err, Error::Forbidden(_)));

    Ok(())
}

#[tokio::test]
async fn test_archive_hides_from_feed_but_not_from_owner() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_state(dir.child("db.sqlite3")).await?;
    let admin = helpers::create_user(&state, "admin", Role::Admin).await?;
    let organizer = helpers::create_user(&state, "org", Role::Organizer).await?;
    let category_id = helpers::create_category(&state, &admin).await?;

    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());
    let event =
        helpers::create_published_event(&state, &organizer, &admin, &category_id).await?;

    let event = command.archive(&organizer, &event.id).await?;
    assert_eq!(event.status.0, Status::Archived);

    let feed = query
        .feed(FeedFilter {
            limit: 20,
            ..Default::default()
        })
        .await?;
    assert!(feed.is_empty());
    assert!(query.find_published(&event.id).await?.is_none());

    // default management listing hides the archive
    let mine = query.mine(&organizer.id, None).await?;
    assert!(mine.is_empty());

    // an explicit filter still reaches it
    let archived = query.mine(&organizer.id, Some(Status::Archived)).await?;
    assert_eq!(archived.len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_owner_delete_limited_by_status() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_state(dir.child("db.sqlite3")).await?;
    let admin = helpers::create_user(&state, "admin", Role::Admin).await?;
    let organizer = helpers::create_user(&state, "org", Role::Organizer).await?;
    let category_id = helpers::create_category(&state, &admin).await?;

    let command = Command::new(state.clone());
    let event =
        helpers::create_published_event(&state, &organizer, &admin, &category_id).await?;

    let err = command.delete(&organizer, &event.id).await.unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));

    // admin hard delete removes the record entirely
    command.delete(&admin, &event.id).await?;
    assert!(command.load(&event.id).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn test_owner_edit_limited_by_status() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_state(dir.child("db.sqlite3")).await?;
    let admin = helpers::create_user(&state, "admin", Role::Admin).await?;
    let organizer = helpers::create_user(&state, "org", Role::Organizer).await?;
    let category_id = helpers::create_category(&state, &admin).await?;

    let command = Command::new(state.clone());
    let event = command
        .create(&organizer, helpers::event_input(&category_id))
        .await?;
    command.submit(&organizer, &event.id).await?;

    let err = command
        .update(
            &organizer,
            &event.id,
            UpdateEventInput {
                title: Some("New title".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));

    // admins may edit regardless of status
    let event = command
        .update(
            &admin,
            &event.id,
            UpdateEventInput {
                title: Some("Fixed title".to_owned()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(event.title, "Fixed title");

    Ok(())
}
