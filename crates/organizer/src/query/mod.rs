use afisha_db::table::OrganizerRequest;
use sea_query::{Expr, ExprTrait, Order, Query as SeaQuery, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{OrganizerRequestRow, Status, repository::REQUEST_COLUMNS};

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    /// Requests filed by one user, newest first.
    pub async fn mine(&self, user_id: &str) -> anyhow::Result<Vec<OrganizerRequestRow>> {
        let statement = SeaQuery::select()
            .columns(REQUEST_COLUMNS)
            .from(OrganizerRequest::Table)
            .and_where(Expr::col(OrganizerRequest::UserId).eq(user_id))
            .order_by(OrganizerRequest::CreatedAt, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(
            sqlx::query_as_with::<_, OrganizerRequestRow, _>(&sql, values)
                .fetch_all(&self.0)
                .await?,
        )
    }

    pub async fn admin_list(
        &self,
        status: Option<Status>,
        limit: u64,
        offset: u64,
    ) -> anyhow::Result<Vec<OrganizerRequestRow>> {
        let mut statement = SeaQuery::select()
            .columns(REQUEST_COLUMNS)
            .from(OrganizerRequest::Table)
            .to_owned();

        if let Some(status) = status {
            statement.and_where(Expr::col(OrganizerRequest::Status).eq(status.to_string()));
        }

        statement.order_by(OrganizerRequest::CreatedAt, Order::Desc);

        if limit > 0 {
            statement.limit(limit);
        }

        if offset > 0 {
            statement.offset(offset);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(
            sqlx::query_as_with::<_, OrganizerRequestRow, _>(&sql, values)
                .fetch_all(&self.0)
                .await?,
        )
    }
}
