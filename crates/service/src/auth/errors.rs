use thiserror::Error;

/// Business errors for credential workflows
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("user already exists")]
    Conflict,
    #[error("user not found")]
    NotFound,
    #[error("invalid credentials")]
    Unauthorized,
    #[error("hashing error: {0}")]
    HashError(String),
    #[error("token error: {0}")]
    TokenError(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl CredentialError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            CredentialError::Validation(_) => 1001,
            CredentialError::Conflict => 1002,
            CredentialError::NotFound => 1003,
            CredentialError::Unauthorized => 1004,
            CredentialError::HashError(_) => 1101,
            CredentialError::TokenError(_) => 1102,
            CredentialError::Repository(_) => 1200,
        }
    }
}

impl From<models::errors::ModelError> for CredentialError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Validation(msg) => CredentialError::Validation(msg),
            models::errors::ModelError::Db(msg) => CredentialError::Repository(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_grouped_by_layer() {
        assert_eq!(CredentialError::Validation("x".into()).code(), 1001);
        assert_eq!(CredentialError::Unauthorized.code(), 1004);
        assert_eq!(CredentialError::HashError("x".into()).code(), 1101);
        assert_eq!(CredentialError::Repository("x".into()).code(), 1200);
    }
}
