use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::Category;

pub struct CreateCategoryTable;

fn create_category_table_statement() -> TableCreateStatement {
    Table::create()
        .table(Category::Table)
        .col(ColumnDef::new(Category::Id).string().not_null().string_len(26).primary_key())
        .col(ColumnDef::new(Category::Name).string().not_null().string_len(100))
        .col(ColumnDef::new(Category::Slug).string().not_null().string_len(100))
        .col(ColumnDef::new(Category::Description).text())
        .to_owned()
}

fn drop_category_table_statement() -> TableDropStatement {
    Table::drop().table(Category::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateCategoryTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_category_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_category_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateCategoryNameIdx;

fn create_idx_category_name_statement() -> IndexCreateStatement {
    Index::create()
        .name("idx_category_name")
        .table(Category::Table)
        .unique()
        .col(Category::Name)
        .to_owned()
}

fn drop_idx_category_name_statement() -> IndexDropStatement {
    Index::drop()
        .name("idx_category_name")
        .table(Category::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateCategoryNameIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_category_name_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_category_name_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateCategorySlugIdx;

fn create_idx_category_slug_statement() -> IndexCreateStatement {
    Index::create()
        .name("idx_category_slug")
        .table(Category::Table)
        .unique()
        .col(Category::Slug)
        .to_owned()
}

fn drop_idx_category_slug_statement() -> IndexDropStatement {
    Index::drop()
        .name("idx_category_slug")
        .table(Category::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateCategorySlugIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_category_slug_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_category_slug_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
