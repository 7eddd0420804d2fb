use async_trait::async_trait;
use models::{cliente, servico};
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// Persistence seam for clients. `None` / `false` mean the client does not exist.
#[async_trait]
pub trait ClienteRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<cliente::Model>, ServiceError>;
    async fn create(&self, nome: &str) -> Result<cliente::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<cliente::Model>, ServiceError>;
    async fn update(&self, id: i32, nome: &str) -> Result<Option<cliente::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    async fn list_servicos(&self, id: i32) -> Result<Option<Vec<servico::Model>>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmClienteRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ClienteRepository for SeaOrmClienteRepository {
    async fn list(&self) -> Result<Vec<cliente::Model>, ServiceError> {
        Ok(cliente::list_all(&self.db).await?)
    }

    async fn create(&self, nome: &str) -> Result<cliente::Model, ServiceError> {
        Ok(cliente::create(&self.db, nome).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<cliente::Model>, ServiceError> {
        Ok(cliente::find(&self.db, id).await?)
    }

    async fn update(&self, id: i32, nome: &str) -> Result<Option<cliente::Model>, ServiceError> {
        Ok(cliente::rename(&self.db, id, nome).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(cliente::delete(&self.db, id).await?)
    }

    async fn list_servicos(&self, id: i32) -> Result<Option<Vec<servico::Model>>, ServiceError> {
        Ok(cliente::servicos(&self.db, id).await?)
    }
}
