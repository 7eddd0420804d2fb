use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::auth::{
    repo::SeaOrmUsuarioRepository,
    service::{CredentialConfig, CredentialService},
};
use service::clientes::{repository::SeaOrmClienteRepository, ClienteService};
use service::servicos::{repository::SeaOrmServicoRepository, ServicoService};

/// Shared handler state. Built once at startup, cloned per request.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub clientes: Arc<ClienteService<SeaOrmClienteRepository>>,
    pub servicos: Arc<ServicoService<SeaOrmServicoRepository>>,
    /// Not routed yet; held so the credential helper shares the pool.
    pub credentials: Arc<CredentialService<SeaOrmUsuarioRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, auth: &configs::AuthConfig) -> Self {
        let clientes = ClienteService::new(Arc::new(SeaOrmClienteRepository { db: db.clone() }));
        let servicos = ServicoService::new(Arc::new(SeaOrmServicoRepository { db: db.clone() }));
        let credentials = CredentialService::new(
            Arc::new(SeaOrmUsuarioRepository { db: db.clone() }),
            CredentialConfig { jwt_secret: Some(auth.jwt_secret.clone()), token_ttl_hours: auth.token_ttl_hours },
        );
        Self {
            db,
            clientes: Arc::new(clientes),
            servicos: Arc::new(servicos),
            credentials: Arc::new(credentials),
        }
    }
}
