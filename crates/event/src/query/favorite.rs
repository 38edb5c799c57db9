use afisha_db::table::Favorite;
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{EventRow, Status};

impl super::Query {
    /// Published favorites of a user, most recently added first.
    pub async fn favorites_of(&self, user_id: &str) -> anyhow::Result<Vec<EventRow>> {
        let statement = Query::select()
            .column(Favorite::EventId)
            .from(Favorite::Table)
            .and_where(Expr::col(Favorite::UserId).eq(user_id))
            .order_by(Favorite::CreatedAt, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let ids = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_all(&self.0)
            .await?
            .into_iter()
            .map(|(id,)| id)
            .collect::<Vec<_>>();

        let mut events = self.events_by_ids(&ids).await?;
        events.retain(|event| event.status.0 == Status::Published);
        events.sort_by_key(|event| ids.iter().position(|id| *id == event.id));

        Ok(events)
    }

    pub async fn is_favorite(&self, user_id: &str, event_id: &str) -> anyhow::Result<bool> {
        let statement = Query::select()
            .column(Favorite::Id)
            .from(Favorite::Table)
            .and_where(Expr::col(Favorite::UserId).eq(user_id))
            .and_where(Expr::col(Favorite::EventId).eq(event_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
            .fetch_optional(&self.0)
            .await?;

        Ok(row.is_some())
    }
}
