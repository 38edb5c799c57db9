use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Index, IndexCreateStatement, IndexDropStatement, Table,
    TableCreateStatement, TableDropStatement,
};

use crate::table::{SupportTicket, User};

pub struct CreateSupportTicketTable;

fn create_support_ticket_table_statement() -> TableCreateStatement {
    Table::create()
        .table(SupportTicket::Table)
        .col(ColumnDef::new(SupportTicket::Id).string().not_null().string_len(26).primary_key())
        .col(ColumnDef::new(SupportTicket::UserId).string().not_null().string_len(26))
        .col(ColumnDef::new(SupportTicket::Subject).string().not_null().string_len(255))
        .col(ColumnDef::new(SupportTicket::Message).text().not_null())
        .col(ColumnDef::new(SupportTicket::Status).string().not_null().string_len(16))
        .col(ColumnDef::new(SupportTicket::AdminReply).text())
        .col(ColumnDef::new(SupportTicket::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(SupportTicket::UpdatedAt).big_integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .from(SupportTicket::Table, SupportTicket::UserId)
                .to(User::Table, User::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn drop_support_ticket_table_statement() -> TableDropStatement {
    Table::drop().table(SupportTicket::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateSupportTicketTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_support_ticket_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_support_ticket_table_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateSupportTicketUserIdx;

fn create_idx_support_ticket_user_statement() -> IndexCreateStatement {
    Index::create()
        .name("idx_support_ticket_user")
        .table(SupportTicket::Table)
        .col(SupportTicket::UserId)
        .to_owned()
}

fn drop_idx_support_ticket_user_statement() -> IndexDropStatement {
    Index::drop()
        .name("idx_support_ticket_user")
        .table(SupportTicket::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateSupportTicketUserIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_support_ticket_user_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_support_ticket_user_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateSupportTicketStatusIdx;

fn create_idx_support_ticket_status_statement() -> IndexCreateStatement {
    Index::create()
        .name("idx_support_ticket_status")
        .table(SupportTicket::Table)
        .col(SupportTicket::Status)
        .to_owned()
}

fn drop_idx_support_ticket_status_statement() -> IndexDropStatement {
    Index::drop()
        .name("idx_support_ticket_status")
        .table(SupportTicket::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateSupportTicketStatusIdx {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_support_ticket_status_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_support_ticket_status_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
