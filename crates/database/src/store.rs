// database/store.rs - the operations the bootstrap needs from a document store

use crate::error::StoreError;
use async_trait::async_trait;
use mongodb::bson::Document;

mod mongo;

/// Ascending or descending key on a single document field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSpec {
    pub field: String,
    pub direction: i32,
}

impl IndexSpec {
    pub fn ascending(field: impl Into<String>) -> Self {
        IndexSpec {
            field: field.into(),
            direction: 1,
        }
    }

    /// Key document passed to the store, e.g. `{ dni: 1 }`.
    pub fn keys(&self) -> Document {
        let mut keys = Document::new();
        keys.insert(self.field.clone(), self.direction);
        keys
    }

    /// Name the store generates for this key when none is given, e.g. `dni_1`.
    pub fn name(&self) -> String {
        format!("{}_{}", self.field, self.direction)
    }
}

/// A connection that can hand out logical databases by name.
///
/// Selecting a database never fails: stores materialize databases lazily
/// on first write.
pub trait DocumentStore: Send + Sync {
    type Catalog: CollectionCatalog;

    fn database(&self, name: &str) -> Self::Catalog;
}

/// Metadata operations on one logical database.
#[async_trait]
pub trait CollectionCatalog: Send + Sync {
    fn name(&self) -> &str;

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError>;

    async fn create_collection(&self, name: &str) -> Result<(), StoreError>;

    /// Declare an index and return its name. Declaring an identical index
    /// again is a no-op.
    async fn create_index(&self, collection: &str, index: &IndexSpec)
        -> Result<String, StoreError>;
}
