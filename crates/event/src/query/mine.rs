use afisha_db::table::Event;
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{EventRow, Status, repository::EVENT_COLUMNS};

impl super::Query {
    /// Events owned by an organizer. Without an explicit status filter the
    /// archive is hidden, matching the default management view.
    pub async fn mine(
        &self,
        organizer_id: &str,
        status: Option<Status>,
    ) -> anyhow::Result<Vec<EventRow>> {
        let mut statement = Query::select()
            .columns(EVENT_COLUMNS)
            .from(Event::Table)
            .and_where(Expr::col(Event::OrganizerId).eq(organizer_id))
            .to_owned();

        match status {
            Some(status) => {
                statement.and_where(Expr::col(Event::Status).eq(status.to_string()));
            }
            None => {
                statement.and_where(Expr::col(Event::Status).ne(Status::Archived.to_string()));
            }
        }

        statement.order_by(Event::CreatedAt, Order::Desc);

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, EventRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    /// Single event regardless of status, for management and moderation
    /// views. Ownership is checked by the caller.
    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<EventRow>> {
        let statement = Query::select()
            .columns(EVENT_COLUMNS)
            .from(Event::Table)
            .and_where(Expr::col(Event::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, EventRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    /// Moderation queue and other admin listings.
    pub async fn admin_list(
        &self,
        status: Option<Status>,
        limit: u64,
        offset: u64,
    ) -> anyhow::Result<Vec<EventRow>> {
        let mut statement = Query::select()
            .columns(EVENT_COLUMNS)
            .from(Event::Table)
            .to_owned();

        if let Some(status) = status {
            statement.and_where(Expr::col(Event::Status).eq(status.to_string()));
        }

        statement.order_by(Event::CreatedAt, Order::Desc);

        if limit > 0 {
            statement.limit(limit);
        }

        if offset > 0 {
            statement.offset(offset);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, EventRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }
}
