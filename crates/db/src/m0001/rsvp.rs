use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement, Table,
    TableCreateStatement, TableDropStatement,
};

use crate::table::{Event, Rsvp, User};

pub struct CreateRsvpTable;

fn create_rsvp_table_statement() -> TableCreateStatement {
    Table::create()
        .table(Rsvp::Table)
        .col(ColumnDef::new(Rsvp::Id).string().not_null().string_len(26).primary_key())
        .col(ColumnDef::new(Rsvp::UserId).string().not_null().string_len(26))
        .col(ColumnDef::new(Rsvp::EventId).string().not_null().string_len(26))
        .col(ColumnDef::new(Rsvp::Status).string().not_null().string_len(16))
        .col(ColumnDef::new(Rsvp::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Rsvp::UpdatedAt).big_integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .from(Rsvp::Table, Rsvp::UserId)
                .to(User::Table, User::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .from(Rsvp::Table, Rsvp::EventId)
                .to(Event::Table, Event::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_rsvp_table_statement() -> TableDropStatement {
    Table::drop().table(Rsvp::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateRsvpTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_rsvp_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_rsvp_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateRsvpUserEventIdx;

fn create_idx_rsvp_user_event_statement() -> IndexCreateStatement {
    Index::create()
        .name("idx_rsvp_user_event")
        .table(Rsvp::Table)
        .unique()
        .col(Rsvp::UserId)
        .col(Rsvp::EventId)
        .to_owned()
}

fn drop_idx_rsvp_user_event_statement() -> IndexDropStatement {
    Index::drop()
        .name("idx_rsvp_user_event")
        .table(Rsvp::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateRsvpUserEventIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_rsvp_user_event_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_rsvp_user_event_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateRsvpEventIdx;

fn create_idx_rsvp_event_statement() -> IndexCreateStatement {
    Index::create()
        .name("idx_rsvp_event")
        .table(Rsvp::Table)
        .col(Rsvp::EventId)
        .to_owned()
}

fn drop_idx_rsvp_event_statement() -> IndexDropStatement {
    Index::drop()
        .name("idx_rsvp_event")
        .table(Rsvp::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateRsvpEventIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_rsvp_event_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_rsvp_event_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
