use afisha_db::table::SupportTicket;
use sea_query::{Expr, ExprTrait, Order, Query as SeaQuery, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{Status, SupportTicketRow, repository::TICKET_COLUMNS};

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    pub async fn mine(&self, user_id: &str) -> anyhow::Result<Vec<SupportTicketRow>> {
        let statement = SeaQuery::select()
            .columns(TICKET_COLUMNS)
            .from(SupportTicket::Table)
            .and_where(Expr::col(SupportTicket::UserId).eq(user_id))
            .order_by(SupportTicket::CreatedAt, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, SupportTicketRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn admin_list(
        &self,
        status: Option<Status>,
        limit: u64,
        offset: u64,
    ) -> anyhow::Result<Vec<SupportTicketRow>> {
        let mut statement = SeaQuery::select()
            .columns(TICKET_COLUMNS)
            .from(SupportTicket::Table)
            .to_owned();

        if let Some(status) = status {
            statement.and_where(Expr::col(SupportTicket::Status).eq(status.to_string()));
        }

        statement.order_by(SupportTicket::CreatedAt, Order::Desc);

        if limit > 0 {
            statement.limit(limit);
        }

        if offset > 0 {
            statement.offset(offset);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, SupportTicketRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }
}
