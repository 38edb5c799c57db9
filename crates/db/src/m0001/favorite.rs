use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement, Table,
    TableCreateStatement, TableDropStatement,
};

use crate::table::{Event, Favorite, User};

pub struct CreateFavoriteTable;

fn create_favorite_table_statement() -> TableCreateStatement {
    Table::create()
        .table(Favorite::Table)
        .col(ColumnDef::new(Favorite::Id).string().not_null().string_len(26).primary_key())
        .col(ColumnDef::new(Favorite::UserId).string().not_null().string_len(26))
        .col(ColumnDef::new(Favorite::EventId).string().not_null().string_len(26))
        .col(ColumnDef::new(Favorite::CreatedAt).big_integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .from(Favorite::Table, Favorite::UserId)
                .to(User::Table, User::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(Favorite::Table, Favorite::EventId)
                .to(Event::Table, Event::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_favorite_table_statement() -> TableDropStatement {
    Table::drop().table(Favorite::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateFavoriteTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_favorite_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_favorite_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateFavoriteUserEventIdx;

fn create_idx_favorite_user_event_statement() -> IndexCreateStatement {
    Index::create()
        .name("idx_favorite_user_event")
        .table(Favorite::Table)
        .unique()
        .col(Favorite::UserId)
        .col(Favorite::EventId)
        .to_owned()
}

fn drop_idx_favorite_user_event_statement() -> IndexDropStatement {
    Index::drop()
        .name("idx_favorite_user_event")
        .table(Favorite::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateFavoriteUserEventIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_favorite_user_event_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_favorite_user_event_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
