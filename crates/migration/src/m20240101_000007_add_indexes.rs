use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Servico: lookups by owning client
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_servico_cliente")
                    .table(Servico::Table)
                    .col(Servico::ClienteId)
                    .to_owned(),
            )
            .await?;

        // Endereco: at most one address per client
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uniq_endereco_cliente")
                    .table(Endereco::Table)
                    .col(Endereco::ClienteId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // TecnicoServico: reverse lookups from a service
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tecnico_servico_servico")
                    .table(TecnicoServico::Table)
                    .col(TecnicoServico::ServicoId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_tecnico_servico_servico").table(TecnicoServico::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_endereco_cliente").table(Endereco::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_servico_cliente").table(Servico::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Servico { Table, ClienteId }

#[derive(DeriveIden)]
enum Endereco { Table, ClienteId }

#[derive(DeriveIden)]
enum TecnicoServico { Table, ServicoId }
