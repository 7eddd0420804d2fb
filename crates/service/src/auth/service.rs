use std::sync::Arc;

use argon2::{password_hash::{PasswordHasher, PasswordVerifier, SaltString}, Argon2, PasswordHash};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use rand::rngs::OsRng;
use tracing::{debug, info, instrument};

use super::domain::{AuthSession, AuthUsuario, Claims, Credentials, NewUsuario};
use super::errors::CredentialError;
use super::repository::UsuarioRepository;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Credential service configuration
#[derive(Clone)]
pub struct CredentialConfig {
    /// Tokens are only issued when a signing secret is configured.
    pub jwt_secret: Option<String>,
    pub token_ttl_hours: i64,
}

/// Salted one-way hash of `senha` as an Argon2 PHC string.
pub fn hash_password(senha: &str) -> Result<String, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(senha.as_bytes(), &salt)
        .map_err(|e| CredentialError::HashError(e.to_string()))?
        .to_string())
}

/// Check `senha` against a stored PHC string.
///
/// A malformed hash is an error; a mismatch is `Ok(false)`.
///
/// # Examples
/// ```
/// use service::auth::service::{hash_password, verify_password};
/// let stored = hash_password("Secret123").unwrap();
/// assert!(verify_password("Secret123", &stored).unwrap());
/// assert!(!verify_password("secret123", &stored).unwrap());
/// assert!(verify_password("Secret123", "not-a-phc-string").is_err());
/// ```
pub fn verify_password(senha: &str, senha_hash: &str) -> Result<bool, CredentialError> {
    let parsed = PasswordHash::new(senha_hash).map_err(|e| CredentialError::HashError(e.to_string()))?;
    Ok(Argon2::default().verify_password(senha.as_bytes(), &parsed).is_ok())
}

/// Credential business service independent of web framework
pub struct CredentialService<R: UsuarioRepository> {
    repo: Arc<R>,
    cfg: CredentialConfig,
}

impl<R: UsuarioRepository> CredentialService<R> {
    pub fn new(repo: Arc<R>, cfg: CredentialConfig) -> Self { Self { repo, cfg } }

    /// Register a new user with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{CredentialService, CredentialConfig}, repository::mock::MockUsuarioRepository};
    /// use service::auth::domain::NewUsuario;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockUsuarioRepository::default());
    /// let svc = CredentialService::new(repo, CredentialConfig { jwt_secret: None, token_ttl_hours: 12 });
    /// let input = NewUsuario { email: "user@example.com".into(), senha: "Secret123".into() };
    /// let u = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(u.email, "user@example.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: NewUsuario) -> Result<AuthUsuario, CredentialError> {
        check_strength(&input.senha)?;
        let email = normalize_email(&input.email);
        if let Some(existing) = self.repo.find_by_email(email).await? {
            debug!("user exists: {}", existing.usuario.email);
            return Err(CredentialError::Conflict);
        }

        let hash = hash_password(&input.senha)?;
        let usuario = self.repo.create(email, &hash).await?;
        info!(usuario_id = usuario.id, email = %usuario.email, "usuario_registered");
        Ok(usuario)
    }

    /// Replace the stored hash for an existing user.
    #[instrument(skip(self, senha))]
    pub async fn set_password(&self, usuario_id: i32, senha: &str) -> Result<AuthUsuario, CredentialError> {
        check_strength(senha)?;
        let hash = hash_password(senha)?;
        let usuario = self
            .repo
            .set_senha_hash(usuario_id, hash)
            .await?
            .ok_or(CredentialError::NotFound)?;
        info!(usuario_id, "password_set");
        Ok(usuario)
    }

    /// Unknown email and wrong password are indistinguishable to the caller.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn authenticate(&self, input: Credentials) -> Result<AuthUsuario, CredentialError> {
        let stored = self
            .repo
            .find_by_email(normalize_email(&input.email))
            .await?
            .ok_or(CredentialError::Unauthorized)?;
        if !verify_password(&input.senha, &stored.senha_hash)? {
            return Err(CredentialError::Unauthorized);
        }
        Ok(stored.usuario)
    }

    /// Authenticate a user and issue a token when a secret is configured.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{CredentialService, CredentialConfig}, repository::mock::MockUsuarioRepository};
    /// use service::auth::domain::{NewUsuario, Credentials};
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockUsuarioRepository::default());
    /// let svc = CredentialService::new(repo, CredentialConfig { jwt_secret: Some("secret".into()), token_ttl_hours: 12 });
    /// let _ = tokio_test::block_on(svc.register(NewUsuario { email: "u@e.com".into(), senha: "Passw0rd".into() }));
    /// let session = tokio_test::block_on(svc.login(Credentials { email: "u@e.com".into(), senha: "Passw0rd".into() })).unwrap();
    /// assert_eq!(session.usuario.email, "u@e.com");
    /// assert!(session.token.is_some());
    /// ```
    pub async fn login(&self, input: Credentials) -> Result<AuthSession, CredentialError> {
        let usuario = self.authenticate(input).await?;
        let token = match self.cfg.jwt_secret {
            Some(_) => Some(self.issue_token(&usuario)?),
            None => None,
        };
        Ok(AuthSession { usuario, token })
    }

    /// Sign an HS256 token for `usuario`, valid for `token_ttl_hours`.
    pub fn issue_token(&self, usuario: &AuthUsuario) -> Result<String, CredentialError> {
        let secret = self.secret()?;
        let exp = (chrono::Utc::now() + chrono::Duration::hours(self.cfg.token_ttl_hours)).timestamp() as usize;
        let claims = Claims { sub: usuario.email.clone(), uid: usuario.id, exp };
        encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(secret.as_bytes()))
            .map_err(|e| CredentialError::TokenError(e.to_string()))
    }

    /// Verify signature and expiry, returning the claims.
    pub fn decode_token(&self, token: &str) -> Result<Claims, CredentialError> {
        let secret = self.secret()?;
        decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| CredentialError::TokenError(e.to_string()))
    }

    fn secret(&self) -> Result<&str, CredentialError> {
        self.cfg
            .jwt_secret
            .as_deref()
            .ok_or_else(|| CredentialError::TokenError("signing secret not configured".into()))
    }
}

/// Emails are stored and looked up without surrounding whitespace.
fn normalize_email(email: &str) -> &str {
    email.trim()
}

fn check_strength(senha: &str) -> Result<(), CredentialError> {
    if senha.len() < MIN_PASSWORD_LEN {
        return Err(CredentialError::Validation(format!("password too short (>={MIN_PASSWORD_LEN})")));
    }
    Ok(())
}
