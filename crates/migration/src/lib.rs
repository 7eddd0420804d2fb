//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_usuario;
mod m20240101_000002_create_cliente;
mod m20240101_000003_create_servico;
mod m20240101_000004_create_endereco;
mod m20240101_000005_create_tecnico;
mod m20240101_000006_create_tecnico_servico;
mod m20240101_000007_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_usuario::Migration),
            Box::new(m20240101_000002_create_cliente::Migration),
            Box::new(m20240101_000003_create_servico::Migration),
            Box::new(m20240101_000004_create_endereco::Migration),
            Box::new(m20240101_000005_create_tecnico::Migration),
            Box::new(m20240101_000006_create_tecnico_servico::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000007_add_indexes::Migration),
        ]
    }
}
