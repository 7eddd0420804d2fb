//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access through repository traits.
//! - Reuses validation and entity definitions in `models` crate.
//! - Maps absent records to `ServiceError::NotFound` so callers never see `Option`.

pub mod errors;
pub mod auth;
pub mod clientes;
pub mod servicos;
#[cfg(test)]
pub mod test_support;
