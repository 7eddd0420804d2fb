use std::sync::Arc;

use models::servico;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::servicos::domain::{AtualizaServico, NovoServico, ServicoComCliente};
use crate::servicos::repository::ServicoRepository;

/// Application service for service orders.
pub struct ServicoService<R: ServicoRepository> {
    repo: Arc<R>,
}

impl<R: ServicoRepository> ServicoService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<ServicoComCliente>, ServiceError> {
        self.repo.list_with_cliente().await
    }

    /// Create a service owned by an existing client; an unknown `cliente_id` is `NotFound`.
    #[instrument(skip(self, input), fields(cliente_id = input.cliente_id))]
    pub async fn create(&self, input: NovoServico) -> Result<servico::Model, ServiceError> {
        servico::validate_titulo(&input.titulo)?;
        servico::validate_descricao(input.descricao.as_deref())?;
        let created = self
            .repo
            .create_for_cliente(&input)
            .await?
            .ok_or_else(|| ServiceError::not_found("cliente"))?;
        info!(servico_id = created.id, cliente_id = created.cliente_id, "servico_created");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<servico::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("serviço"))
    }

    /// Overwrites `titulo` and `descricao`; the owning client never changes.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: AtualizaServico) -> Result<servico::Model, ServiceError> {
        servico::validate_titulo(&input.titulo)?;
        servico::validate_descricao(input.descricao.as_deref())?;
        let updated = self
            .repo
            .overwrite(id, &input)
            .await?
            .ok_or_else(|| ServiceError::not_found("serviço"))?;
        info!(servico_id = id, "servico_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("serviço"));
        }
        info!(servico_id = id, "servico_deleted");
        Ok(())
    }
}
