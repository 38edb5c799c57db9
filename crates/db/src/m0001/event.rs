use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement, Table,
    TableCreateStatement, TableDropStatement,
};

use crate::table::{Category, Event, User};

pub struct CreateEventTable;

fn create_event_table_statement() -> TableCreateStatement {
    Table::create()
        .table(Event::Table)
        .col(ColumnDef::new(Event::Id).string().not_null().string_len(26).primary_key())
        .col(ColumnDef::new(Event::OrganizerId).string().not_null().string_len(26))
        .col(ColumnDef::new(Event::CategoryId).string().not_null().string_len(26))
        .col(ColumnDef::new(Event::Title).string().not_null().string_len(255))
        .col(ColumnDef::new(Event::Description).text())
        .col(ColumnDef::new(Event::Status).string().not_null().string_len(32))
        .col(ColumnDef::new(Event::ModerationComment).text())
        .col(ColumnDef::new(Event::StartsAt).big_integer().not_null())
        .col(ColumnDef::new(Event::EndsAt).big_integer())
        .col(ColumnDef::new(Event::AddressText).string().string_len(255))
        .col(ColumnDef::new(Event::Latitude).double().not_null())
        .col(ColumnDef::new(Event::Longitude).double().not_null())
        .col(ColumnDef::new(Event::IsFree).boolean().not_null())
        .col(ColumnDef::new(Event::PriceFrom).big_integer())
        .col(ColumnDef::new(Event::Capacity).big_integer())
        .col(ColumnDef::new(Event::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Event::UpdatedAt).big_integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .from(Event::Table, Event::OrganizerId)
                .to(User::Table, User::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(Event::Table, Event::CategoryId)
                .to(Category::Table, Category::Id)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .to_owned()
}

fn drop_event_table_statement() -> TableDropStatement {
    Table::drop().table(Event::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateEventTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_event_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_event_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateEventStatusIdx;

fn create_idx_event_status_statement() -> IndexCreateStatement {
    Index::create()
        .name("idx_event_status")
        .table(Event::Table)
        .col(Event::Status)
        .to_owned()
}

fn drop_idx_event_status_statement() -> IndexDropStatement {
    Index::drop()
        .name("idx_event_status")
        .table(Event::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateEventStatusIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_event_status_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_event_status_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateEventOrganizerIdx;

fn create_idx_event_organizer_statement() -> IndexCreateStatement {
    Index::create()
        .name("idx_event_organizer")
        .table(Event::Table)
        .col(Event::OrganizerId)
        .to_owned()
}

fn drop_idx_event_organizer_statement() -> IndexDropStatement {
    Index::drop()
        .name("idx_event_organizer")
        .table(Event::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateEventOrganizerIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_event_organizer_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_event_organizer_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateEventStartsAtIdx;

fn create_idx_event_starts_at_statement() -> IndexCreateStatement {
    Index::create()
        .name("idx_event_starts_at")
        .table(Event::Table)
        .col(Event::StartsAt)
        .to_owned()
}

fn drop_idx_event_starts_at_statement() -> IndexDropStatement {
    Index::drop()
        .name("idx_event_starts_at")
        .table(Event::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateEventStartsAtIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_event_starts_at_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_event_starts_at_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
