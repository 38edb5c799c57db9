use afisha_db::table::Event;
use sea_query::{Cond, Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{EventRow, Status, repository::EVENT_COLUMNS};

/// Filters of the public feed and map views. The bounding box applies only
/// when all four bounds are present.
#[derive(Debug, Default)]
pub struct FeedFilter {
    pub category_id: Option<String>,
    pub date_from: Option<i64>,
    pub date_to: Option<i64>,
    pub q: Option<String>,
    pub lat_min: Option<f64>,
    pub lat_max: Option<f64>,
    pub lng_min: Option<f64>,
    pub lng_max: Option<f64>,
    pub limit: u64,
    pub offset: u64,
}

impl super::Query {
    /// Published events only, ordered by start time. Serves the feed and
    /// the map for guests and authenticated users alike.
    pub async fn feed(&self, filter: FeedFilter) -> anyhow::Result<Vec<EventRow>> {
        let mut statement = Query::select()
            .columns(EVENT_COLUMNS)
            .from(Event::Table)
            .and_where(Expr::col(Event::Status).eq(Status::Published.to_string()))
            .to_owned();

        if let Some(category_id) = filter.category_id {
            statement.and_where(Expr::col(Event::CategoryId).eq(category_id));
        }

        if let Some(date_from) = filter.date_from {
            statement.and_where(Expr::col(Event::StartsAt).gte(date_from));
        }

        if let Some(date_to) = filter.date_to {
            statement.and_where(Expr::col(Event::StartsAt).lte(date_to));
        }

        if let Some(q) = filter.q {
            let like = format!("%{q}%");
            statement.cond_where(
                Cond::any()
                    .add(Expr::col(Event::Title).like(&like))
                    .add(Expr::col(Event::Description).like(&like)),
            );
        }

        if let (Some(lat_min), Some(lat_max), Some(lng_min), Some(lng_max)) =
            (filter.lat_min, filter.lat_max, filter.lng_min, filter.lng_max)
        {
            statement
                .and_where(Expr::col(Event::Latitude).gte(lat_min))
                .and_where(Expr::col(Event::Latitude).lte(lat_max))
                .and_where(Expr::col(Event::Longitude).gte(lng_min))
                .and_where(Expr::col(Event::Longitude).lte(lng_max));
        }

        statement.order_by(Event::StartsAt, Order::Asc);

        if filter.limit > 0 {
            statement.limit(filter.limit);
        }

        if filter.offset > 0 {
            statement.offset(filter.offset);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, EventRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    /// Public single-event lookup; anything not published reads as absent.
    pub async fn find_published(
        &self,
        id: impl Into<String>,
    ) -> anyhow::Result<Option<EventRow>> {
        let statement = Query::select()
            .columns(EVENT_COLUMNS)
            .from(Event::Table)
            .and_where(Expr::col(Event::Id).eq(id.into()))
            .and_where(Expr::col(Event::Status).eq(Status::Published.to_string()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, EventRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    pub async fn events_by_ids(&self, ids: &[String]) -> anyhow::Result<Vec<EventRow>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let statement = Query::select()
            .columns(EVENT_COLUMNS)
            .from(Event::Table)
            .and_where(Expr::col(Event::Id).is_in(ids.to_vec()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, EventRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }
}
