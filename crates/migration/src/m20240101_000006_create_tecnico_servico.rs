//! Create the `tecnico_servico` join table (technician <-> service).
//!
//! No surrogate key: the pair of foreign keys is the primary key, and rows
//! vanish with either side.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TecnicoServico::Table)
                    .if_not_exists()
                    .col(integer(TecnicoServico::TecnicoId))
                    .col(integer(TecnicoServico::ServicoId))
                    .primary_key(
                        Index::create()
                            .col(TecnicoServico::TecnicoId)
                            .col(TecnicoServico::ServicoId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tecnico_servico_tecnico")
                            .from(TecnicoServico::Table, TecnicoServico::TecnicoId)
                            .to(Tecnico::Table, Tecnico::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tecnico_servico_servico")
                            .from(TecnicoServico::Table, TecnicoServico::ServicoId)
                            .to(Servico::Table, Servico::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(TecnicoServico::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum TecnicoServico { Table, TecnicoId, ServicoId }

#[derive(DeriveIden)]
enum Tecnico { Table, Id }

#[derive(DeriveIden)]
enum Servico { Table, Id }
