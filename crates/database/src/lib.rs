// database/lib.rs - store access and the idempotent bootstrap for the clientes database

pub mod bootstrap;
pub mod clientes;
pub mod error;
pub mod store;
