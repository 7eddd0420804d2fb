//! Credential helper: three-layer architecture (domain, repository, service).
//!
//! Hashes and verifies user passwords and signs session tokens. No HTTP route
//! calls into it yet; it is wired into the server state for a future auth layer.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::CredentialService;
