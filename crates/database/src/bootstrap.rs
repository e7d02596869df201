// database/bootstrap.rs - one-shot provisioning of a collection and its indexes

use crate::clientes::{cliente_indexes, COLLECTION_NAME, DATABASE_NAME};
use crate::error::BootstrapError;
use crate::store::{CollectionCatalog, DocumentStore, IndexSpec};
use tracing::{debug, info};

/// What to provision: a collection inside a logical database, plus the
/// single-field indexes declared when the collection is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapPlan {
    pub database: String,
    pub collection: String,
    pub indexes: Vec<IndexSpec>,
    // Also declare the indexes when the collection already exists
    pub ensure_indexes: bool,
}

impl BootstrapPlan {
    /// `clientesdb.cliente` with ascending indexes on `dni` and `email`.
    pub fn clientes() -> Self {
        BootstrapPlan {
            database: DATABASE_NAME.to_string(),
            collection: COLLECTION_NAME.to_string(),
            indexes: cliente_indexes(),
            ensure_indexes: false,
        }
    }

    pub fn namespace(&self) -> String {
        format!("{}.{}", self.database, self.collection)
    }
}

impl Default for BootstrapPlan {
    fn default() -> Self {
        BootstrapPlan::clientes()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The collection was missing and has been created along with its indexes.
    Created { indexes: Vec<String> },
    /// The collection was already there. `indexes` is empty unless the plan
    /// asked to re-declare them.
    AlreadyExists { indexes: Vec<String> },
}

impl BootstrapOutcome {
    pub fn created(&self) -> bool {
        matches!(self, BootstrapOutcome::Created { .. })
    }

    pub fn indexes(&self) -> &[String] {
        match self {
            BootstrapOutcome::Created { indexes } => indexes,
            BootstrapOutcome::AlreadyExists { indexes } => indexes,
        }
    }
}

/// Create the plan's collection and indexes if the collection does not exist.
///
/// Safe to run any number of times: after the first successful run every
/// later run takes the "already exists" branch. Errors are returned as soon
/// as a store call fails, and a re-run picks up from whatever state the
/// store was left in.
pub async fn run_bootstrap<S: DocumentStore>(
    store: &S,
    plan: &BootstrapPlan,
) -> Result<BootstrapOutcome, BootstrapError> {
    info!("Initializing database and collection {}", plan.namespace());

    let catalog = store.database(&plan.database);

    let collections = catalog.list_collection_names().await.map_err(|source| {
        BootstrapError::ListCollections {
            database: plan.database.clone(),
            source,
        }
    })?;
    debug!("Collections in {}: {:?}", catalog.name(), collections);

    if collections.iter().any(|name| *name == plan.collection) {
        info!("Collection '{}' already exists", plan.collection);

        let indexes = if plan.ensure_indexes {
            create_indexes(&catalog, plan).await?
        } else {
            vec![]
        };

        return Ok(BootstrapOutcome::AlreadyExists { indexes });
    }

    catalog
        .create_collection(&plan.collection)
        .await
        .map_err(|source| BootstrapError::CreateCollection {
            namespace: plan.namespace(),
            source,
        })?;

    let indexes = create_indexes(&catalog, plan).await?;

    info!("Collection '{}' created", plan.collection);

    Ok(BootstrapOutcome::Created { indexes })
}

async fn create_indexes<C: CollectionCatalog>(
    catalog: &C,
    plan: &BootstrapPlan,
) -> Result<Vec<String>, BootstrapError> {
    let mut names = Vec::with_capacity(plan.indexes.len());

    for index in &plan.indexes {
        let name = catalog
            .create_index(&plan.collection, index)
            .await
            .map_err(|source| BootstrapError::CreateIndex {
                namespace: plan.namespace(),
                field: index.field.clone(),
                source,
            })?;
        debug!("Declared index {} on {}", name, plan.namespace());
        names.push(name);
    }

    Ok(names)
}
