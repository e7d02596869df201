// database/clientes.rs - names and indexes of the cliente collection

use crate::store::IndexSpec;

pub const DATABASE_NAME: &str = "clientesdb";
pub const COLLECTION_NAME: &str = "cliente";

// Lookup fields, neither one unique
pub const INDEXED_FIELDS: [&str; 2] = ["dni", "email"];

pub fn cliente_indexes() -> Vec<IndexSpec> {
    INDEXED_FIELDS.iter().map(|field| IndexSpec::ascending(*field)).collect()
}
