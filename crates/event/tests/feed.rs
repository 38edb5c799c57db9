use afisha_event::{Command, FeedFilter, Query, UpdateEventInput};
use afisha_shared::user::Role;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_feed_filters() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_state(dir.child("db.sqlite3")).await?;
    let admin = helpers::create_user(&state, "admin", Role::Admin).await?;
    let organizer = helpers::create_user(&state, "org", Role::Organizer).await?;
    let category_id = helpers::create_category(&state, &admin).await?;

    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());

    let jazz = helpers::create_published_event(&state, &organizer, &admin, &category_id).await?;

    let mut input = helpers::event_input(&category_id);
    input.title = "Open-air cinema".to_owned();
    input.description = Some("Classic movies under the stars".to_owned());
    input.starts_at = jazz.starts_at + 86_400;
    input.latitude = 59.93;
    input.longitude = 30.33;
    let cinema = command.create(&organizer, input).await?;
    command.submit(&organizer, &cinema.id).await?;
    let cinema = command.publish(&admin, &cinema.id).await?;

    // free-text search over title and description
    let found = query
        .feed(FeedFilter {
            q: Some("cinema".to_owned()),
            limit: 20,
            ..Default::default()
        })
        .await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, cinema.id);

    // date range keeps only the later event
    let found = query
        .feed(FeedFilter {
            date_from: Some(jazz.starts_at + 1),
            limit: 20,
            ..Default::default()
        })
        .await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, cinema.id);

    // bounding box around the first venue
    let found = query
        .feed(FeedFilter {
            lat_min: Some(55.0),
            lat_max: Some(56.0),
            lng_min: Some(37.0),
            lng_max: Some(38.0),
            limit: 20,
            ..Default::default()
        })
        .await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, jazz.id);

    // an incomplete box is ignored rather than applied partially
    let found = query
        .feed(FeedFilter {
            lat_min: Some(55.0),
            lat_max: Some(56.0),
            lng_min: Some(37.0),
            limit: 20,
            ..Default::default()
        })
        .await?;
    assert_eq!(found.len(), 2);

    // feed is ordered by start time
    assert_eq!(found[0].id, jazz.id);
    assert_eq!(found[1].id, cinema.id);

    Ok(())
}

#[tokio::test]
async fn test_feed_shows_published_only() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_state(dir.child("db.sqlite3")).await?;
    let admin = helpers::create_user(&state, "admin", Role::Admin).await?;
    let organizer = helpers::create_user(&state, "org", Role::Organizer).await?;
    let category_id = helpers::create_category(&state, &admin).await?;

    let command = Command::new(state.clone());
    let query = Query(state.read_db.clone());

    let draft = command
        .create(&organizer, helpers::event_input(&category_id))
        .await?;
    command
        .update(
            &organizer,
            &draft.id,
            UpdateEventInput {
                title: Some("Still a draft".to_owned()),
                ..Default::default()
            },
        )
        .await?;

    let feed = query
        .feed(FeedFilter {
            limit: 20,
            ..Default::default()
        })
        .await?;
    assert!(feed.is_empty());
    assert!(query.find_published(&draft.id).await?.is_none());

    Ok(())
}
