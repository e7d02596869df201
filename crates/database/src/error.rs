// database/error.rs - error types for store calls and the bootstrap sequence

use thiserror::Error;

/// Failure reported by a document store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),
    // Backends that are not the mongodb driver report failures as text
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Step of the bootstrap that failed, with the namespace it was working on.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to list collections in '{database}'")]
    ListCollections {
        database: String,
        #[source]
        source: StoreError,
    },
    #[error("failed to create collection '{namespace}'")]
    CreateCollection {
        namespace: String,
        #[source]
        source: StoreError,
    },
    #[error("failed to create index on '{field}' for '{namespace}'")]
    CreateIndex {
        namespace: String,
        field: String,
        #[source]
        source: StoreError,
    },
}
