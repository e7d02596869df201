// admin/main.rs - provisioning commands for the clientes database

use anyhow::Context;
use clap::{Parser, Subcommand};
use database::bootstrap::{run_bootstrap, BootstrapOutcome, BootstrapPlan};
use database::clientes::{COLLECTION_NAME, DATABASE_NAME};
use dotenvy::dotenv;
use mongodb::{bson::doc, Client};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(name = "admin")]
struct Args {
    #[clap(subcommand)]
    subcommand: Subcommands,
    #[arg(
        long,
        env = "DATABASE_URI",
        default_value = "mongodb://localhost:27017"
    )]
    database_uri: String,
    #[arg(long, env = "DATABASE_NAME", default_value = DATABASE_NAME)]
    database_name: String,
    #[arg(long, env = "COLLECTION_NAME", default_value = COLLECTION_NAME)]
    collection: String,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// Create the collection and its indexes if the collection is missing
    #[clap(name = "init-db")]
    InitDatabase {
        // Declare the indexes even when the collection already exists
        #[arg(long)]
        ensure_indexes: bool,
    },
}

impl Args {
    fn plan(&self, ensure_indexes: bool) -> BootstrapPlan {
        BootstrapPlan {
            database: self.database_name.clone(),
            collection: self.collection.clone(),
            ensure_indexes,
            ..BootstrapPlan::clientes()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Parse CLI args, using ENV vars if not provided
    let args = Args::parse();

    // Set up tracing
    let env_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_layer)
        .with_target(true)
        .init();

    // Create database client and make sure the server answers
    let db_client = Client::with_uri_str(&args.database_uri)
        .await
        .context("Failed to create database client.")?;
    db_client
        .database("admin")
        .run_command(doc! { "ping": 1 }, None)
        .await
        .context("Failed to connect to database.")?;
    debug!("Connected to {}", args.database_uri);

    match args.subcommand {
        Subcommands::InitDatabase { ensure_indexes } => {
            let plan = args.plan(ensure_indexes);

            let outcome = run_bootstrap(&db_client, &plan)
                .await
                .with_context(|| format!("Failed to initialize {}.", plan.namespace()))?;

            match outcome {
                BootstrapOutcome::Created { indexes } => {
                    info!("Database initialized with indexes {:?}.", indexes)
                }
                BootstrapOutcome::AlreadyExists { indexes } if !indexes.is_empty() => {
                    info!("Indexes {:?} ensured on existing collection.", indexes)
                }
                BootstrapOutcome::AlreadyExists { .. } => {
                    info!("Nothing to do for {}.", plan.namespace())
                }
            }
        }
    }

    Ok(())
}
