use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tecnico::Table)
                    .if_not_exists()
                    .col(pk_auto(Tecnico::Id))
                    .col(string_len_null(Tecnico::Nome, 100))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Tecnico::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Tecnico { Table, Id, Nome }
