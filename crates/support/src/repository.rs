use afisha_db::table::SupportTicket;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

use crate::Status;

#[derive(Debug, Clone, FromRow)]
pub struct SupportTicketRow {
    pub id: String,
    pub user_id: String,
    pub subject: String,
    pub message: String,
    pub status: sqlx::types::Text<Status>,
    pub admin_reply: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

pub(crate) const TICKET_COLUMNS: [SupportTicket; 8] = [
    SupportTicket::Id,
    SupportTicket::UserId,
    SupportTicket::Subject,
    SupportTicket::Message,
    SupportTicket::Status,
    SupportTicket::AdminReply,
    SupportTicket::CreatedAt,
    SupportTicket::UpdatedAt,
];

pub(crate) async fn find(
    pool: &SqlitePool,
    id: impl Into<String>,
) -> afisha_shared::Result<Option<SupportTicketRow>> {
    let statement = Query::select()
        .columns(TICKET_COLUMNS)
        .from(SupportTicket::Table)
        .and_where(Expr::col(SupportTicket::Id).eq(id.into()))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, SupportTicketRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn insert(
    pool: &SqlitePool,
    row: &SupportTicketRow,
) -> afisha_shared::Result<()> {
    let statement = Query::insert()
        .into_table(SupportTicket::Table)
        .columns(TICKET_COLUMNS)
        .values_panic([
            row.id.to_owned().into(),
            row.user_id.to_owned().into(),
            row.subject.to_owned().into(),
            row.message.to_owned().into(),
            row.status.0.to_string().into(),
            row.admin_reply.to_owned().into(),
            row.created_at.into(),
            row.updated_at.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn set_status(
    pool: &SqlitePool,
    id: &str,
    status: Status,
    admin_reply: Option<String>,
    now: i64,
) -> afisha_shared::Result<()> {
    let mut statement = Query::update()
        .table(SupportTicket::Table)
        .values([
            (SupportTicket::Status, status.to_string().into()),
            (SupportTicket::UpdatedAt, now.into()),
        ])
        .and_where(Expr::col(SupportTicket::Id).eq(id))
        .to_owned();

    if let Some(admin_reply) = admin_reply {
        statement.value(SupportTicket::AdminReply, admin_reply);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}

pub(crate) async fn delete(pool: &SqlitePool, id: &str) -> afisha_shared::Result<()> {
    let statement = Query::delete()
        .from_table(SupportTicket::Table)
        .and_where(Expr::col(SupportTicket::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(())
}
