//! Create `servico` table.
//!
//! `cliente_id` is required but carries no database-level foreign key: the
//! owning client is checked when a service is created, and deleting a client
//! leaves its services in place.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Servico::Table)
                    .if_not_exists()
                    .col(pk_auto(Servico::Id))
                    .col(string_len(Servico::Titulo, 100).not_null())
                    .col(string_len_null(Servico::Descricao, 100))
                    .col(integer(Servico::ClienteId).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Servico::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Servico { Table, Id, Titulo, Descricao, ClienteId }
