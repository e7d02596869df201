// database/store/mongo.rs - DocumentStore backed by the mongodb driver

use super::{CollectionCatalog, DocumentStore, IndexSpec};
use crate::error::StoreError;
use async_trait::async_trait;
use mongodb::{bson::Document, Client, Database, IndexModel};

impl DocumentStore for Client {
    type Catalog = Database;

    fn database(&self, name: &str) -> Database {
        Client::database(self, name)
    }
}

#[async_trait]
impl CollectionCatalog for Database {
    fn name(&self) -> &str {
        Database::name(self)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(Database::list_collection_names(self, None).await?)
    }

    async fn create_collection(&self, name: &str) -> Result<(), StoreError> {
        Ok(Database::create_collection(self, name, None).await?)
    }

    async fn create_index(
        &self,
        collection: &str,
        index: &IndexSpec,
    ) -> Result<String, StoreError> {
        let model = IndexModel::builder().keys(index.keys()).build();

        let result = self
            .collection::<Document>(collection)
            .create_index(model, None)
            .await?;

        Ok(result.index_name)
    }
}
