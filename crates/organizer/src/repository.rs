use afisha_db::table::OrganizerRequest;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

use crate::Status;

#[derive(Debug, Clone, FromRow)]
pub struct OrganizerRequestRow {
    pub id: String,
    pub user_id: String,
    pub status: sqlx::types::Text<Status>,
    pub message: String,
    pub admin_comment: Option<String>,
    pub created_at: i64,
    pub resolved_at: Option<i64>,
}

pub(crate) const REQUEST_COLUMNS: [OrganizerRequest; 7] = [
    OrganizerRequest::Id,
    OrganizerRequest::UserId,
    OrganizerRequest::Status,
    OrganizerRequest::Message,
    OrganizerRequest::AdminComment,
    OrganizerRequest::CreatedAt,
    OrganizerRequest::ResolvedAt,
];

pub(crate) async fn find(
    pool: &SqlitePool,
    id: impl Into<String>,
) -> afisha_shared::Result<Option<OrganizerRequestRow>> {
    let statement = Query::select()
        .columns(REQUEST_COLUMNS)
        .from(OrganizerRequest::Table)
        .and_where(Expr::col(OrganizerRequest::Id).eq(id.into()))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(
        sqlx::query_as_with::<_, OrganizerRequestRow, _>(&sql, values)
            .fetch_optional(pool)
            .await?,
    )
}

pub(crate) async fn has_pending(
    pool: &SqlitePool,
    user_id: &str,
) -> afisha_shared::Result<bool> {
    let statement = Query::select()
        .column(OrganizerRequest::Id)
        .from(OrganizerRequest::Table)
        .and_where(Expr::col(OrganizerRequest::UserId).eq(user_id))
        .and_where(Expr::col(OrganizerRequest::Status).eq(Status::Pending.to_string()))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

pub(crate) async fn insert(
    pool: &SqlitePool,
    row: &OrganizerRequestRow,
) -> afisha_shared::Result<()> {
    let statement = Query::insert()
        .into_table(OrganizerRequest::Table)
        .columns(REQUEST_COLUMNS)
        .values_panic([
            row.id.to_owned().into(),
            row.user_id.to_owned().into(),
            row.status.0.to_string().into(),
            row.message.to_owned().into(),
            row.admin_comment.to_owned().into(),
            row.created_at.into(),
            row.resolved_at.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

/// Statement that records an admin decision on a pending request. Built
/// here, executed by the command inside its transaction.
pub(crate) fn decide_statement(
    id: &str,
    status: Status,
    admin_comment: &str,
    now: i64,
) -> (String, sea_query_sqlx::SqlxValues) {
    Query::update()
        .table(OrganizerRequest::Table)
        .values([
            (OrganizerRequest::Status, status.to_string().into()),
            (OrganizerRequest::AdminComment, admin_comment.into()),
            (OrganizerRequest::ResolvedAt, now.into()),
        ])
        .and_where(Expr::col(OrganizerRequest::Id).eq(id))
        .build_sqlx(SqliteQueryBuilder)
}
