//! Service-order CRUD. Creation is guarded by a lookup of the owning client.

pub mod domain;
pub mod repository;
pub mod service;

pub use service::ServicoService;
