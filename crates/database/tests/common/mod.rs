#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use database::error::StoreError;
use database::store::{CollectionCatalog, DocumentStore, IndexSpec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    ListCollections { database: String },
    CreateCollection { database: String, collection: String },
    CreateIndex { database: String, collection: String, field: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailOn {
    ListCollections,
    CreateCollection,
    CreateIndex(String),
}

#[derive(Debug, Default)]
struct StoreState {
    // (database, collection) -> index names
    collections: BTreeMap<(String, String), BTreeSet<String>>,
    calls: Vec<StoreCall>,
    fail_on: Option<FailOn>,
}

/// In-memory document store that records every call made against it.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<StoreState>>,
}

pub struct MemoryDatabase {
    name: String,
    state: Arc<Mutex<StoreState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Create a collection with no indexes, as an operator would by hand.
    pub fn with_collection(self, database: &str, collection: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .collections
            .insert((database.to_string(), collection.to_string()), BTreeSet::new());
        self
    }

    pub fn fail_on(&self, fail_on: FailOn) {
        self.state.lock().unwrap().fail_on = Some(fail_on);
    }

    pub fn calls(&self) -> Vec<StoreCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn create_index_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, StoreCall::CreateIndex { .. }))
            .count()
    }

    pub fn collection_names(&self, database: &str) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .collections
            .keys()
            .filter(|(db, _)| db == database)
            .map(|(_, collection)| collection.clone())
            .collect()
    }

    pub fn index_names(&self, database: &str, collection: &str) -> BTreeSet<String> {
        self.state
            .lock()
            .unwrap()
            .collections
            .get(&(database.to_string(), collection.to_string()))
            .cloned()
            .unwrap_or_default()
    }
}

impl DocumentStore for MemoryStore {
    type Catalog = MemoryDatabase;

    fn database(&self, name: &str) -> MemoryDatabase {
        MemoryDatabase {
            name: name.to_string(),
            state: self.state.clone(),
        }
    }
}

#[async_trait]
impl CollectionCatalog for MemoryDatabase {
    fn name(&self) -> &str {
        &self.name
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(StoreCall::ListCollections {
            database: self.name.clone(),
        });
        if state.fail_on == Some(FailOn::ListCollections) {
            return Err(StoreError::Unavailable("connection reset".to_string()));
        }

        Ok(state
            .collections
            .keys()
            .filter(|(db, _)| *db == self.name)
            .map(|(_, collection)| collection.clone())
            .collect())
    }

    async fn create_collection(&self, name: &str) -> Result<(), StoreError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(StoreCall::CreateCollection {
            database: self.name.clone(),
            collection: name.to_string(),
        });
        if state.fail_on == Some(FailOn::CreateCollection) {
            return Err(StoreError::Unavailable("not authorized".to_string()));
        }

        let key = (self.name.clone(), name.to_string());
        if state.collections.contains_key(&key) {
            return Err(StoreError::Unavailable(format!(
                "collection already exists: {}.{}",
                self.name, name
            )));
        }
        state.collections.insert(key, BTreeSet::new());
        Ok(())
    }

    async fn create_index(
        &self,
        collection: &str,
        index: &IndexSpec,
    ) -> Result<String, StoreError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(StoreCall::CreateIndex {
            database: self.name.clone(),
            collection: collection.to_string(),
            field: index.field.clone(),
        });
        if state.fail_on == Some(FailOn::CreateIndex(index.field.clone())) {
            return Err(StoreError::Unavailable("index build aborted".to_string()));
        }

        // Like mongod, declaring an index implicitly creates the collection
        let name = index.name();
        state
            .collections
            .entry((self.name.clone(), collection.to_string()))
            .or_default()
            .insert(name.clone());
        Ok(name)
    }
}
