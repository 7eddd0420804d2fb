use std::sync::Arc;

use models::{cliente, servico};
use tracing::{info, instrument};

use crate::clientes::repository::ClienteRepository;
use crate::errors::ServiceError;

/// Application service for clients.
/// Validates input before touching the store and turns missing rows into `NotFound`.
pub struct ClienteService<R: ClienteRepository> {
    repo: Arc<R>,
}

impl<R: ClienteRepository> ClienteService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<cliente::Model>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip(self))]
    pub async fn create(&self, nome: &str) -> Result<cliente::Model, ServiceError> {
        cliente::validate_nome(nome)?;
        let created = self.repo.create(nome).await?;
        info!(cliente_id = created.id, "cliente_created");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<cliente::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("cliente"))
    }

    /// Full overwrite of `nome`.
    #[instrument(skip(self))]
    pub async fn update(&self, id: i32, nome: &str) -> Result<cliente::Model, ServiceError> {
        cliente::validate_nome(nome)?;
        let updated = self
            .repo
            .update(id, nome)
            .await?
            .ok_or_else(|| ServiceError::not_found("cliente"))?;
        info!(cliente_id = id, "cliente_updated");
        Ok(updated)
    }

    /// Deletes the client only. Its services keep pointing at the removed id.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("cliente"));
        }
        info!(cliente_id = id, "cliente_deleted");
        Ok(())
    }

    pub async fn list_servicos(&self, id: i32) -> Result<Vec<servico::Model>, ServiceError> {
        self.repo.list_servicos(id).await?.ok_or_else(|| ServiceError::not_found("cliente"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clientes::repository::SeaOrmClienteRepository;
    use crate::test_support::get_db;

    async fn service() -> Result<ClienteService<SeaOrmClienteRepository>, anyhow::Error> {
        let db = get_db().await?;
        Ok(ClienteService::new(Arc::new(SeaOrmClienteRepository { db })))
    }

    #[tokio::test]
    async fn cliente_crud_service() -> Result<(), anyhow::Error> {
        let svc = service().await?;

        let c = svc.create("Ana").await?;
        assert_eq!(svc.get(c.id).await?.nome, "Ana");

        let updated = svc.update(c.id, "Beatriz").await?;
        assert_eq!(updated.nome, "Beatriz");
        assert_eq!(svc.list().await?, vec![updated]);

        svc.delete(c.id).await?;
        assert!(svc.list().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn missing_cliente_is_not_found_everywhere() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        assert!(matches!(svc.get(999).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.update(999, "X").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.delete(999).await, Err(ServiceError::NotFound(_))));
        assert!(matches!(svc.list_servicos(999).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }

    #[tokio::test]
    async fn blank_nome_fails_before_lookup() -> Result<(), anyhow::Error> {
        let svc = service().await?;
        assert!(matches!(svc.create("  ").await, Err(ServiceError::Validation(_))));
        // validation wins over the missing id
        assert!(matches!(svc.update(999, "").await, Err(ServiceError::Validation(_))));
        Ok(())
    }
}
