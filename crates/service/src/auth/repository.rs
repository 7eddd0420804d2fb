use async_trait::async_trait;

use super::domain::{AuthUsuario, StoredUsuario};
use super::errors::CredentialError;

/// Repository abstraction for credential persistence.
#[async_trait]
pub trait UsuarioRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredUsuario>, CredentialError>;
    async fn create(&self, email: &str, senha_hash: &str) -> Result<AuthUsuario, CredentialError>;
    /// `None` when no user has this id.
    async fn set_senha_hash(&self, id: i32, senha_hash: String) -> Result<Option<AuthUsuario>, CredentialError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct MockUsuarioRepository {
        rows: Mutex<HashMap<i32, StoredUsuario>>,
        next_id: AtomicI32,
    }

    impl MockUsuarioRepository {
        fn rows(&self) -> Result<MutexGuard<'_, HashMap<i32, StoredUsuario>>, CredentialError> {
            self.rows.lock().map_err(|e| CredentialError::Repository(e.to_string()))
        }
    }

    #[async_trait]
    impl UsuarioRepository for MockUsuarioRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<StoredUsuario>, CredentialError> {
            Ok(self.rows()?.values().find(|u| u.usuario.email == email).cloned())
        }

        async fn create(&self, email: &str, senha_hash: &str) -> Result<AuthUsuario, CredentialError> {
            let mut rows = self.rows()?;
            if rows.values().any(|u| u.usuario.email == email) {
                return Err(CredentialError::Conflict);
            }
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
            let usuario = AuthUsuario { id, email: email.to_string() };
            rows.insert(id, StoredUsuario { usuario: usuario.clone(), senha_hash: senha_hash.to_string() });
            Ok(usuario)
        }

        async fn set_senha_hash(&self, id: i32, senha_hash: String) -> Result<Option<AuthUsuario>, CredentialError> {
            let mut rows = self.rows()?;
            Ok(rows.get_mut(&id).map(|row| {
                row.senha_hash = senha_hash;
                row.usuario.clone()
            }))
        }
    }
}
