//! Create `endereco` table with optional FK to `cliente`.
//!
//! A client owns at most one address; deleting the client detaches it.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Endereco::Table)
                    .if_not_exists()
                    .col(pk_auto(Endereco::Id))
                    .col(string_len_null(Endereco::Rua, 200))
                    .col(integer_null(Endereco::ClienteId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_endereco_cliente")
                            .from(Endereco::Table, Endereco::ClienteId)
                            .to(Cliente::Table, Cliente::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Endereco::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Endereco { Table, Id, Rua, ClienteId }

#[derive(DeriveIden)]
enum Cliente { Table, Id }
