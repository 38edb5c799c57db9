use afisha_db::table::{Category, Event, Favorite, Rsvp};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

use crate::{RsvpStatus, Status};

#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: String,
    pub organizer_id: String,
    pub category_id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: sqlx::types::Text<Status>,
    pub moderation_comment: Option<String>,
    pub starts_at: i64,
    pub ends_at: Option<i64>,
    pub address_text: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub is_free: bool,
    pub price_from: Option<i64>,
    pub capacity: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct RsvpRow {
    pub id: String,
    pub user_id: String,
    pub event_id: String,
    pub status: sqlx::types::Text<RsvpStatus>,
    pub created_at: i64,
    pub updated_at: i64,
}

pub(crate) const EVENT_COLUMNS: [Event; 17] = [
    Event::Id,
    Event::OrganizerId,
    Event::CategoryId,
    Event::Title,
    Event::Description,
    Event::Status,
    Event::ModerationComment,
    Event::StartsAt,
    Event::EndsAt,
    Event::AddressText,
    Event::Latitude,
    Event::Longitude,
    Event::IsFree,
    Event::PriceFrom,
    Event::Capacity,
    Event::CreatedAt,
    Event::UpdatedAt,
];

pub(crate) async fn find_event(
    pool: &SqlitePool,
    id: impl Into<String>,
) -> afisha_shared::Result<Option<EventRow>> {
    let statement = Query::select()
        .columns(EVENT_COLUMNS)
        .from(Event::Table)
        .and_where(Expr::col(Event::Id).eq(id.into()))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, EventRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn insert_event(pool: &SqlitePool, row: &EventRow) -> afisha_shared::Result<()> {
    let statement = Query::insert()
        .into_table(Event::Table)
        .columns(EVENT_COLUMNS)
        .values_panic([
            row.id.to_owned().into(),
            row.organizer_id.to_owned().into(),
            row.category_id.to_owned().into(),
            row.title.to_owned().into(),
            row.description.to_owned().into(),
            row.status.0.to_string().into(),
            row.moderation_comment.to_owned().into(),
            row.starts_at.into(),
            row.ends_at.into(),
            row.address_text.to_owned().into(),
            row.latitude.into(),
            row.longitude.into(),
            row.is_free.into(),
            row.price_from.into(),
            row.capacity.into(),
            row.created_at.into(),
            row.updated_at.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

/// Persists the mutable fields of an already merged event row.
pub(crate) async fn update_event(pool: &SqlitePool, row: &EventRow) -> afisha_shared::Result<()> {
    let statement = Query::update()
        .table(Event::Table)
        .values([
            (Event::CategoryId, row.category_id.to_owned().into()),
            (Event::Title, row.title.to_owned().into()),
            (Event::Description, row.description.to_owned().into()),
            (Event::StartsAt, row.starts_at.into()),
            (Event::EndsAt, row.ends_at.into()),
            (Event::AddressText, row.address_text.to_owned().into()),
            (Event::Latitude, row.latitude.into()),
            (Event::Longitude, row.longitude.into()),
            (Event::IsFree, row.is_free.into()),
            (Event::PriceFrom, row.price_from.into()),
            (Event::Capacity, row.capacity.into()),
            (Event::UpdatedAt, row.updated_at.into()),
        ])
        .and_where(Expr::col(Event::Id).eq(row.id.to_owned()))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn set_event_status(
    pool: &SqlitePool,
    id: &str,
    status: Status,
    moderation_comment: Option<String>,
    now: i64,
) -> afisha_shared::Result<()> {
    let statement = Query::update()
        .table(Event::Table)
        .values([
            (Event::Status, status.to_string().into()),
            (Event::ModerationComment, moderation_comment.into()),
            (Event::UpdatedAt, now.into()),
        ])
        .and_where(Expr::col(Event::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn delete_event(pool: &SqlitePool, id: &str) -> afisha_shared::Result<()> {
    let statement = Query::delete()
        .from_table(Event::Table)
        .and_where(Expr::col(Event::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn find_category(
    pool: &SqlitePool,
    id: impl Into<String>,
) -> afisha_shared::Result<Option<CategoryRow>> {
    let statement = Query::select()
        .columns([
            Category::Id,
            Category::Name,
            Category::Slug,
            Category::Description,
        ])
        .from(Category::Table)
        .and_where(Expr::col(Category::Id).eq(id.into()))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, CategoryRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn category_name_or_slug_exists(
    pool: &SqlitePool,
    name: &str,
    slug: &str,
) -> afisha_shared::Result<bool> {
    let statement = Query::select()
        .column(Category::Id)
        .from(Category::Table)
        .cond_where(
            sea_query::Cond::any()
                .add(Expr::col(Category::Name).eq(name))
                .add(Expr::col(Category::Slug).eq(slug)),
        )
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

pub(crate) async fn insert_category(
    pool: &SqlitePool,
    row: &CategoryRow,
) -> afisha_shared::Result<()> {
    let statement = Query::insert()
        .into_table(Category::Table)
        .columns([
            Category::Id,
            Category::Name,
            Category::Slug,
            Category::Description,
        ])
        .values_panic([
            row.id.to_owned().into(),
            row.name.to_owned().into(),
            row.slug.to_owned().into(),
            row.description.to_owned().into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn find_rsvp(
    pool: &SqlitePool,
    user_id: &str,
    event_id: &str,
) -> afisha_shared::Result<Option<RsvpRow>> {
    let statement = Query::select()
        .columns([
            Rsvp::Id,
            Rsvp::UserId,
            Rsvp::EventId,
            Rsvp::Status,
            Rsvp::CreatedAt,
            Rsvp::UpdatedAt,
        ])
        .from(Rsvp::Table)
        .and_where(Expr::col(Rsvp::UserId).eq(user_id))
        .and_where(Expr::col(Rsvp::EventId).eq(event_id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, RsvpRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn insert_rsvp(pool: &SqlitePool, row: &RsvpRow) -> afisha_shared::Result<()> {
    let statement = Query::insert()
        .into_table(Rsvp::Table)
        .columns([
            Rsvp::Id,
            Rsvp::UserId,
            Rsvp::EventId,
            Rsvp::Status,
            Rsvp::CreatedAt,
            Rsvp::UpdatedAt,
        ])
        .values_panic([
            row.id.to_owned().into(),
            row.user_id.to_owned().into(),
            row.event_id.to_owned().into(),
            row.status.0.to_string().into(),
            row.created_at.into(),
            row.updated_at.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn update_rsvp_status(
    pool: &SqlitePool,
    id: &str,
    status: RsvpStatus,
    now: i64,
) -> afisha_shared::Result<()> {
    let statement = Query::update()
        .table(Rsvp::Table)
        .values([
            (Rsvp::Status, status.to_string().into()),
            (Rsvp::UpdatedAt, now.into()),
        ])
        .and_where(Expr::col(Rsvp::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn favorite_exists(
    pool: &SqlitePool,
    user_id: &str,
    event_id: &str,
) -> afisha_shared::Result<bool> {
    let statement = Query::select()
        .column(Favorite::Id)
        .from(Favorite::Table)
        .and_where(Expr::col(Favorite::UserId).eq(user_id))
        .and_where(Expr::col(Favorite::EventId).eq(event_id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

pub(crate) async fn insert_favorite(
    pool: &SqlitePool,
    id: &str,
    user_id: &str,
    event_id: &str,
    now: i64,
) -> afisha_shared::Result<()> {
    let statement = Query::insert()
        .into_table(Favorite::Table)
        .columns([
            Favorite::Id,
            Favorite::UserId,
            Favorite::EventId,
            Favorite::CreatedAt,
        ])
        .values_panic([id.into(), user_id.into(), event_id.into(), now.into()])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn delete_favorite(
    pool: &SqlitePool,
    user_id: &str,
    event_id: &str,
) -> afisha_shared::Result<()> {
    let statement = Query::delete()
        .from_table(Favorite::Table)
        .and_where(Expr::col(Favorite::UserId).eq(user_id))
        .and_where(Expr::col(Favorite::EventId).eq(event_id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}
