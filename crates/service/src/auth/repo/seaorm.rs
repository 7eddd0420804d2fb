use models::usuario;
use sea_orm::DatabaseConnection;

use crate::auth::domain::{AuthUsuario, StoredUsuario};
use crate::auth::errors::CredentialError;
use crate::auth::repository::UsuarioRepository;

pub struct SeaOrmUsuarioRepository {
    pub db: DatabaseConnection,
}

fn stored(u: usuario::Model) -> StoredUsuario {
    StoredUsuario { usuario: AuthUsuario { id: u.id, email: u.email }, senha_hash: u.senha_hash }
}

#[async_trait::async_trait]
impl UsuarioRepository for SeaOrmUsuarioRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredUsuario>, CredentialError> {
        Ok(usuario::find_by_email(&self.db, email).await?.map(stored))
    }

    async fn create(&self, email: &str, senha_hash: &str) -> Result<AuthUsuario, CredentialError> {
        let created = usuario::create(&self.db, email, senha_hash).await?;
        Ok(AuthUsuario { id: created.id, email: created.email })
    }

    async fn set_senha_hash(&self, id: i32, senha_hash: String) -> Result<Option<AuthUsuario>, CredentialError> {
        let updated = usuario::set_senha_hash(&self.db, id, senha_hash).await?;
        Ok(updated.map(|u| AuthUsuario { id: u.id, email: u.email }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::auth::domain::{Credentials, NewUsuario};
    use crate::auth::service::{verify_password, CredentialConfig, CredentialService};
    use crate::test_support::get_db;

    #[tokio::test]
    async fn register_and_authenticate_against_sqlite() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = CredentialService::new(
            Arc::new(SeaOrmUsuarioRepository { db: db.clone() }),
            CredentialConfig { jwt_secret: Some("secret".into()), token_ttl_hours: 12 },
        );

        let u = svc.register(NewUsuario { email: "ana@example.com".into(), senha: "Passw0rd!".into() }).await?;
        let row = usuario::find(&db, u.id).await?.expect("row persisted");
        assert!(row.senha_hash.starts_with("$argon2"));
        assert_ne!(row.senha_hash, "Passw0rd!");

        let creds = Credentials { email: "ana@example.com".into(), senha: "Passw0rd!".into() };
        assert_eq!(svc.authenticate(creds).await?, u);

        let dup = svc.register(NewUsuario { email: "ana@example.com".into(), senha: "Outra123".into() }).await;
        assert!(matches!(dup, Err(CredentialError::Conflict)));
        Ok(())
    }

    #[tokio::test]
    async fn padded_email_matches_stored_row() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = CredentialService::new(
            Arc::new(SeaOrmUsuarioRepository { db: db.clone() }),
            CredentialConfig { jwt_secret: None, token_ttl_hours: 12 },
        );
        let u = svc.register(NewUsuario { email: " caio@example.com".into(), senha: "Passw0rd!".into() }).await?;
        assert_eq!(usuario::find(&db, u.id).await?.expect("row persisted").email, "caio@example.com");

        let creds = Credentials { email: "caio@example.com ".into(), senha: "Passw0rd!".into() };
        assert_eq!(svc.authenticate(creds).await?, u);
        Ok(())
    }

    #[tokio::test]
    async fn set_password_replaces_stored_hash() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let svc = CredentialService::new(
            Arc::new(SeaOrmUsuarioRepository { db: db.clone() }),
            CredentialConfig { jwt_secret: None, token_ttl_hours: 12 },
        );
        let u = svc.register(NewUsuario { email: "bia@example.com".into(), senha: "primeira1".into() }).await?;
        svc.set_password(u.id, "segunda22").await?;

        let row = usuario::find(&db, u.id).await?.expect("row persisted");
        assert!(verify_password("segunda22", &row.senha_hash)?);
        assert!(!verify_password("primeira1", &row.senha_hash)?);
        Ok(())
    }
}
