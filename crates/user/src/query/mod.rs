use afisha_db::table::User;
use afisha_shared::user::Role;
use sea_query::{Cond, Expr, ExprTrait, Order, Query as SeaQuery, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::UserRow;
use crate::repository::USER_COLUMNS;

/// Admin user listing filters.
#[derive(Debug, Default)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub blocked: Option<bool>,
    pub q: Option<String>,
    pub limit: u64,
    pub offset: u64,
}

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    pub async fn find(&self, id: impl Into<String>) -> anyhow::Result<Option<UserRow>> {
        let statement = SeaQuery::select()
            .columns(USER_COLUMNS)
            .from(User::Table)
            .and_where(Expr::col(User::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    pub async fn list(&self, filter: UserFilter) -> anyhow::Result<Vec<UserRow>> {
        let mut statement = SeaQuery::select()
            .columns(USER_COLUMNS)
            .from(User::Table)
            .to_owned();

        if let Some(role) = filter.role {
            statement.and_where(Expr::col(User::Role).eq(role.to_string()));
        }

        if let Some(blocked) = filter.blocked {
            statement.and_where(Expr::col(User::Blocked).eq(blocked));
        }

        if let Some(q) = filter.q {
            let like = format!("%{q}%");
            statement.cond_where(
                Cond::any()
                    .add(Expr::col(User::Email).like(&like))
                    .add(Expr::col(User::FullName).like(&like)),
            );
        }

        statement.order_by(User::CreatedAt, Order::Desc);

        if filter.limit > 0 {
            statement.limit(filter.limit);
        }

        if filter.offset > 0 {
            statement.offset(filter.offset);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }
}
