//! Client CRUD: repository abstraction plus the service enforcing existence checks.

pub mod repository;
pub mod service;

pub use service::ClienteService;
