use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement, Table,
    TableCreateStatement, TableDropStatement,
};

use crate::table::{OrganizerRequest, User};

pub struct CreateOrganizerRequestTable;

fn create_organizer_request_table_statement() -> TableCreateStatement {
    Table::create()
        .table(OrganizerRequest::Table)
        .col(ColumnDef::new(OrganizerRequest::Id).string().not_null().string_len(26).primary_key())
        .col(ColumnDef::new(OrganizerRequest::UserId).string().not_null().string_len(26))
        .col(ColumnDef::new(OrganizerRequest::Status).string().not_null().string_len(16))
        .col(ColumnDef::new(OrganizerRequest::Message).text().not_null())
        .col(ColumnDef::new(OrganizerRequest::AdminComment).text())
        .col(ColumnDef::new(OrganizerRequest::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(OrganizerRequest::ResolvedAt).big_integer())
        .foreign_key(
            ForeignKey::create()
                .from(OrganizerRequest::Table, OrganizerRequest::UserId)
                .to(User::Table, User::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_organizer_request_table_statement() -> TableDropStatement {
    Table::drop().table(OrganizerRequest::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateOrganizerRequestTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_organizer_request_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_organizer_request_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateOrganizerRequestUserIdx;

fn create_idx_organizer_request_user_statement() -> IndexCreateStatement {
    Index::create()
        .name("idx_organizer_request_user")
        .table(OrganizerRequest::Table)
        .col(OrganizerRequest::UserId)
        .to_owned()
}

fn drop_idx_organizer_request_user_statement() -> IndexDropStatement {
    Index::drop()
        .name("idx_organizer_request_user")
        .table(OrganizerRequest::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateOrganizerRequestUserIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_organizer_request_user_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_organizer_request_user_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateOrganizerRequestStatusIdx;

fn create_idx_organizer_request_status_statement() -> IndexCreateStatement {
    Index::create()
        .name("idx_organizer_request_status")
        .table(OrganizerRequest::Table)
        .col(OrganizerRequest::Status)
        .to_owned()
}

fn drop_idx_organizer_request_status_statement() -> IndexDropStatement {
    Index::drop()
        .name("idx_organizer_request_status")
        .table(OrganizerRequest::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateOrganizerRequestStatusIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_organizer_request_status_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_organizer_request_status_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
