use afisha_db::table::Category;
use sea_query::{Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::CategoryRow;

const CATEGORY_COLUMNS: [Category; 4] = [
    Category::Id,
    Category::Name,
    Category::Slug,
    Category::Description,
];

impl super::Query {
    pub async fn categories(&self) -> anyhow::Result<Vec<CategoryRow>> {
        let statement = Query::select()
            .columns(CATEGORY_COLUMNS)
            .from(Category::Table)
            .order_by(Category::Name, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, CategoryRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn categories_by_ids(&self, ids: &[String]) -> anyhow::Result<Vec<CategoryRow>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let statement = Query::select()
            .columns(CATEGORY_COLUMNS)
            .from(Category::Table)
            .and_where(Expr::col(Category::Id).is_in(ids.to_vec()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, CategoryRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }
}
