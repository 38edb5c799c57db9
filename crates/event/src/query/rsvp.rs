use std::str::FromStr;

use afisha_db::table::Rsvp;
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;

use crate::{RsvpRow, RsvpStatus};

const RSVP_COLUMNS: [Rsvp; 6] = [
    Rsvp::Id,
    Rsvp::UserId,
    Rsvp::EventId,
    Rsvp::Status,
    Rsvp::CreatedAt,
    Rsvp::UpdatedAt,
];

#[derive(Debug, Default, Serialize)]
pub struct RsvpStats {
    pub going: i64,
    pub interested: i64,
    pub canceled: i64,
}

impl super::Query {
    pub async fn rsvp_stats(&self, event_id: &str) -> anyhow::Result<RsvpStats> {
        let statement = Query::select()
            .column(Rsvp::Status)
            .expr(Expr::col(Rsvp::Id).count())
            .from(Rsvp::Table)
            .and_where(Expr::col(Rsvp::EventId).eq(event_id))
            .group_by_col(Rsvp::Status)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, (String, i64), _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        let mut stats = RsvpStats::default();
        for (status, count) in rows {
            match RsvpStatus::from_str(&status) {
                Ok(RsvpStatus::Going) => stats.going = count,
                Ok(RsvpStatus::Interested) => stats.interested = count,
                Ok(RsvpStatus::Canceled) => stats.canceled = count,
                Err(_) => {}
            }
        }

        Ok(stats)
    }

    pub async fn my_rsvp(
        &self,
        user_id: &str,
        event_id: &str,
    ) -> anyhow::Result<Option<RsvpRow>> {
        let statement = Query::select()
            .columns(RSVP_COLUMNS)
            .from(Rsvp::Table)
            .and_where(Expr::col(Rsvp::UserId).eq(user_id))
            .and_where(Expr::col(Rsvp::EventId).eq(event_id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RsvpRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    /// All RSVPs of one event, newest first. The ownership predicate is
    /// applied by the route before calling this.
    pub async fn rsvps_for_event(&self, event_id: &str) -> anyhow::Result<Vec<RsvpRow>> {
        let statement = Query::select()
            .columns(RSVP_COLUMNS)
            .from(Rsvp::Table)
            .and_where(Expr::col(Rsvp::EventId).eq(event_id))
            .order_by(Rsvp::CreatedAt, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RsvpRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn my_rsvps(&self, user_id: &str) -> anyhow::Result<Vec<RsvpRow>> {
        let statement = Query::select()
            .columns(RSVP_COLUMNS)
            .from(Rsvp::Table)
            .and_where(Expr::col(Rsvp::UserId).eq(user_id))
            .order_by(Rsvp::CreatedAt, Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, RsvpRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }
}
