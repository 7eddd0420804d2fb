use serde::{Deserialize, Serialize};

/// Registration input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUsuario {
    pub email: String,
    pub senha: String,
}

/// Login input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub senha: String,
}

/// Domain user (business view, never carries the hash)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUsuario {
    pub id: i32,
    pub email: String,
}

/// User row together with its stored PHC hash
#[derive(Debug, Clone)]
pub struct StoredUsuario {
    pub usuario: AuthUsuario,
    pub senha_hash: String,
}

/// JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub uid: i32,
    pub exp: usize,
}

/// Login result (session)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub usuario: AuthUsuario,
    pub token: Option<String>,
}
