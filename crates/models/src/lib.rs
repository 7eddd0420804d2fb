//! SeaORM entities for clients, services, addresses, technicians and users,
//! plus the model-level helpers the service layer builds on.

pub mod errors;
pub mod db;
pub mod usuario;
pub mod cliente;
pub mod servico;
pub mod endereco;
pub mod tecnico;
pub mod tecnico_servico;

#[cfg(test)]
mod tests;
