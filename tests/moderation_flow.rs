use afisha_shared::user::Role;
use axum::http::StatusCode;
use temp_dir::TempDir;

mod common;

/// Full moderation scenario: draft -> submit -> reject with comment ->
/// resubmit -> publish -> visible in the public feed.
#[tokio::test]
async fn test_moderation_scenario_end_to_end() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, pool) = common::setup(dir.child("db.sqlite3")).await?;

    let (_admin_id, admin) =
        common::register_and_login(&app, &pool, "admin", Role::Admin).await?;
    let (_org_id, organizer) =
        common::register_and_login(&app, &pool, "org", Role::Organizer).await?;
    let category_id = common::create_category(&app, &admin).await?;

    // organizer creates a draft
    let (status, event) = common::request(
        &app,
        "POST",
        "/events",
        Some(&organizer),
        Some(common::event_body(&category_id)),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(event["status"], "draft");
    let event_id = event["id"].as_str().unwrap().to_owned();

    // a draft is invisible to the public
    let (status, _) = common::request(&app, "GET", &format!("/events/{event_id}"), None, None)
        .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // submit for moderation
    let (status, event) = common::request(
        &app,
        "POST",
        &format!("/events/{event_id}/submit"),
        Some(&organizer),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(event["status"], "pending_moderation");

    // moderation queue shows it
    let (status, queue) =
        common::request(&app, "GET", "/admin/events", Some(&admin), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(queue.as_array().unwrap().len(), 1);

    // admin rejects with a comment
    let (status, event) = common::request(
        &app,
        "POST",
        &format!("/admin/events/{event_id}/reject"),
        Some(&admin),
        Some(serde_json::json!({ "comment": "missing address" })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(event["status"], "rejected");
    assert_eq!(event["moderation_comment"], "missing address");

    // the organizer sees the comment on the manage view
    let (status, event) = common::request(
        &app,
        "GET",
        &format!("/events/{event_id}/manage"),
        Some(&organizer),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(event["moderation_comment"], "missing address");

    // resubmit and publish
    let (status, _) = common::request(
        &app,
        "POST",
        &format!("/events/{event_id}/submit"),
        Some(&organizer),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let (status, event) = common::request(
        &app,
        "POST",
        &format!("/admin/events/{event_id}/publish"),
        Some(&admin),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(event["status"], "published");

    // now in the public feed, category attached
    let (status, feed) = common::request(&app, "GET", "/events", None, None).await?;
    assert_eq!(status, StatusCode::OK);
    let feed = feed.as_array().unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0]["id"], event_id.as_str());
    assert_eq!(feed[0]["category"]["slug"], "concerts");

    Ok(())
}

#[tokio::test]
async fn test_publish_outside_moderation_is_a_conflict() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, pool) = common::setup(dir.child("db.sqlite3")).await?;

    let (_admin_id, admin) =
        common::register_and_login(&app, &pool, "admin", Role::Admin).await?;
    let (_org_id, organizer) =
        common::register_and_login(&app, &pool, "org", Role::Organizer).await?;
    let category_id = common::create_category(&app, &admin).await?;

    let (_, event) = common::request(
        &app,
        "POST",
        "/events",
        Some(&organizer),
        Some(common::event_body(&category_id)),
    )
    .await?;
    let event_id = event["id"].as_str().unwrap();

    let (status, _) = common::request(
        &app,
        "POST",
        &format!("/admin/events/{event_id}/publish"),
        Some(&admin),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
async fn test_reject_requires_comment() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, pool) = common::setup(dir.child("db.sqlite3")).await?;

    let (_admin_id, admin) =
        common::register_and_login(&app, &pool, "admin", Role::Admin).await?;
    let (_org_id, organizer) =
        common::register_and_login(&app, &pool, "org", Role::Organizer).await?;
    let category_id = common::create_category(&app, &admin).await?;

    let (_, event) = common::request(
        &app,
        "POST",
        "/events",
        Some(&organizer),
        Some(common::event_body(&category_id)),
    )
    .await?;
    let event_id = event["id"].as_str().unwrap().to_owned();
    common::request(
        &app,
        "POST",
        &format!("/events/{event_id}/submit"),
        Some(&organizer),
        None,
    )
    .await?;

    let (status, _) = common::request(
        &app,
        "POST",
        &format!("/admin/events/{event_id}/reject"),
        Some(&admin),
        Some(serde_json::json!({ "comment": "" })),
    )
    .await?;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[tokio::test]
async fn test_organizer_request_flow_over_http() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, pool) = common::setup(dir.child("db.sqlite3")).await?;

    let (_admin_id, admin) =
        common::register_and_login(&app, &pool, "admin", Role::Admin).await?;
    let (_user_id, user) =
        common::register_and_login(&app, &pool, "john.doe", Role::User).await?;

    let (status, request) = common::request(
        &app,
        "POST",
        "/organizer-requests",
        Some(&user),
        Some(serde_json::json!({
            "message": "I run a local jazz club and want to list our concerts",
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    let request_id = request["id"].as_str().unwrap().to_owned();

    // a second application while pending conflicts
    let (status, _) = common::request(
        &app,
        "POST",
        "/organizer-requests",
        Some(&user),
        Some(serde_json::json!({
            "message": "I run a local jazz club and want to list our concerts",
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, decided) = common::request(
        &app,
        "POST",
        &format!("/admin/organizer-requests/{request_id}/approve"),
        Some(&admin),
        Some(serde_json::json!({})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(decided["status"], "approved");

    // the promoted user can create events now
    let category_id = common::create_category(&app, &admin).await?;
    let (status, event) = common::request(
        &app,
        "POST",
        "/events",
        Some(&user),
        Some(common::event_body(&category_id)),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(event["status"], "draft");

    Ok(())
}

#[tokio::test]
async fn test_rsvp_and_favorites_over_http() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, pool) = common::setup(dir.child("db.sqlite3")).await?;

    let (_admin_id, admin) =
        common::register_and_login(&app, &pool, "admin", Role::Admin).await?;
    let (_org_id, organizer) =
        common::register_and_login(&app, &pool, "org", Role::Organizer).await?;
    let (_user_id, user) =
        common::register_and_login(&app, &pool, "visitor", Role::User).await?;
    let category_id = common::create_category(&app, &admin).await?;

    let (_, event) = common::request(
        &app,
        "POST",
        "/events",
        Some(&organizer),
        Some(common::event_body(&category_id)),
    )
    .await?;
    let event_id = event["id"].as_str().unwrap().to_owned();
    common::request(
        &app,
        "POST",
        &format!("/events/{event_id}/submit"),
        Some(&organizer),
        None,
    )
    .await?;
    common::request(
        &app,
        "POST",
        &format!("/admin/events/{event_id}/publish"),
        Some(&admin),
        None,
    )
    .await?;

    // RSVP upsert: interested, then going
    let (status, _) = common::request(
        &app,
        "PUT",
        &format!("/events/{event_id}/rsvp"),
        Some(&user),
        Some(serde_json::json!({ "status": "interested" })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    let (status, rsvp) = common::request(
        &app,
        "PUT",
        &format!("/events/{event_id}/rsvp"),
        Some(&user),
        Some(serde_json::json!({ "status": "going" })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rsvp["status"], "going");

    let (status, stats) = common::request(
        &app,
        "GET",
        &format!("/events/{event_id}/rsvp/stats"),
        None,
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["going"], 1);
    assert_eq!(stats["interested"], 0);

    // favorites: add, check, remove twice
    let (status, _) = common::request(
        &app,
        "POST",
        &format!("/favorites/{event_id}"),
        Some(&user),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);

    let (status, list) = common::request(&app, "GET", "/favorites", Some(&user), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, body) = common::request(
        &app,
        "DELETE",
        &format!("/favorites/{event_id}"),
        Some(&user),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_favorite"], false);

    let (status, _) = common::request(
        &app,
        "DELETE",
        &format!("/favorites/{event_id}"),
        Some(&user),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn test_support_ticket_flow_over_http() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let (app, pool) = common::setup(dir.child("db.sqlite3")).await?;

    let (_admin_id, admin) =
        common::register_and_login(&app, &pool, "admin", Role::Admin).await?;
    let (_user_id, user) =
        common::register_and_login(&app, &pool, "john.doe", Role::User).await?;

    let (status, ticket) = common::request(
        &app,
        "POST",
        "/support-tickets",
        Some(&user),
        Some(serde_json::json!({
            "subject": "Cannot find my RSVP",
            "message": "I marked an event as going but it is missing from my list",
        })),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(ticket["status"], "open");
    let ticket_id = ticket["id"].as_str().unwrap().to_owned();

    let (status, ticket) = common::request(
        &app,
        "POST",
        &format!("/admin/support-tickets/{ticket_id}/reply"),
        Some(&admin),
        Some(serde_json::json!({ "reply": "Canceled RSVPs are hidden from the list" })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ticket["status"], "answered");

    let (status, mine) =
        common::request(&app, "GET", "/support-tickets/my", Some(&user), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(mine[0]["admin_reply"], "Canceled RSVPs are hidden from the list");

    let (status, ticket) = common::request(
        &app,
        "POST",
        &format!("/admin/support-tickets/{ticket_id}/close"),
        Some(&admin),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ticket["status"], "closed");

    Ok(())
}
