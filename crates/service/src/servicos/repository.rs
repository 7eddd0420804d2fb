use async_trait::async_trait;
use models::{cliente, servico};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::errors::ServiceError;
use crate::servicos::domain::{AtualizaServico, NovoServico, ServicoComCliente};

#[async_trait]
pub trait ServicoRepository: Send + Sync {
    async fn list_with_cliente(&self) -> Result<Vec<ServicoComCliente>, ServiceError>;
    /// `None` when `cliente_id` does not resolve; nothing is written in that case.
    async fn create_for_cliente(&self, input: &NovoServico) -> Result<Option<servico::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<servico::Model>, ServiceError>;
    async fn overwrite(&self, id: i32, input: &AtualizaServico) -> Result<Option<servico::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmServicoRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ServicoRepository for SeaOrmServicoRepository {
    async fn list_with_cliente(&self) -> Result<Vec<ServicoComCliente>, ServiceError> {
        let rows = servico::list_with_cliente(&self.db).await?;
        Ok(rows
            .into_iter()
            .map(|(servico, cliente)| ServicoComCliente { servico, cliente_nome: cliente.map(|c| c.nome) })
            .collect())
    }

    async fn create_for_cliente(&self, input: &NovoServico) -> Result<Option<servico::Model>, ServiceError> {
        let txn = self.db.begin().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        if cliente::find(&txn, input.cliente_id).await?.is_none() {
            txn.rollback().await.map_err(|e| ServiceError::Db(e.to_string()))?;
            return Ok(None);
        }
        let created = servico::create(&txn, &input.titulo, input.descricao.as_deref(), input.cliente_id).await?;
        txn.commit().await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(created))
    }

    async fn get(&self, id: i32) -> Result<Option<servico::Model>, ServiceError> {
        Ok(servico::find(&self.db, id).await?)
    }

    async fn overwrite(&self, id: i32, input: &AtualizaServico) -> Result<Option<servico::Model>, ServiceError> {
        Ok(servico::overwrite(&self.db, id, &input.titulo, input.descricao.as_deref()).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(servico::delete(&self.db, id).await?)
    }
}
