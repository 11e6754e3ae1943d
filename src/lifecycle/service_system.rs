use crate::clients::{ItemClient, TodoClient};
use crate::config::Config;
use crate::inference::{AdapterStatus, ArtifactLoader, InferenceAdapter, JsonArtifactLoader};
use crate::item_actor::{self, ItemError};
use crate::lifecycle::seed;
use crate::todo_actor::{self, TodoError};
use crate::validation::ValidationError;
use resource_framework::ActorClient;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("invalid seed data: {0}")]
    SeedData(#[from] ValidationError),

    #[error("failed to seed todos: {0}")]
    SeedTodos(#[from] TodoError),

    #[error("failed to seed items: {0}")]
    SeedItems(#[from] ItemError),

    #[error("Actor task failed: {0}")]
    ActorTask(String),
}

/// The runtime orchestrator for the todo, catalog and prediction services.
///
/// `ServiceSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the resource actors
/// - **Model Loading**: running the inference adapter's one load attempt before serving
/// - **Seeding**: filling the collections with the sample data
///
/// A model that fails to load does not stop the system: the adapter stays `Failed` and the
/// prediction endpoint reports it, while the CRUD services run normally.
pub struct ServiceSystem {
    /// Client for the todo list actor
    pub todo_client: TodoClient,

    /// Client for the catalog actor
    pub item_client: ItemClient,

    /// The loaded (or failed) classifier, shared read-only
    pub inference: Arc<InferenceAdapter>,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl ServiceSystem {
    /// Starts every service, loading the model from `config.model_path`.
    pub async fn start(config: &Config) -> Result<Self, SystemError> {
        let loader = JsonArtifactLoader::new(&config.model_path);
        Self::start_with_loader(config, &loader).await
    }

    /// Starts every service with a custom model source.
    pub async fn start_with_loader(
        config: &Config,
        loader: &dyn ArtifactLoader,
    ) -> Result<Self, SystemError> {
        info!(buffer = config.actor_buffer, seed = config.seed_data, "Starting services");

        // 1. Create actors (no dependencies)
        let (todo_actor, todo_client) = todo_actor::new(config.actor_buffer);
        let (item_actor, item_client) = item_actor::new(config.actor_buffer);

        // 2. Start actors (Context = ())
        let handles = vec![
            tokio::spawn(todo_actor.run(())),
            tokio::spawn(item_actor.run(())),
        ];

        // 3. Load the model once
        let inference = Arc::new(InferenceAdapter::load(loader).await);

        let system = Self {
            todo_client,
            item_client,
            inference,
            handles,
        };

        if config.seed_data {
            system.seed().await?;
        }
        Ok(system)
    }

    /// Inserts the sample todos and items.
    pub async fn seed(&self) -> Result<(), SystemError> {
        for todo in seed::todos()? {
            self.todo_client.create(todo).await?;
        }
        for item in seed::items()? {
            self.item_client.create(item).await?;
        }
        info!("Seeded sample data");
        Ok(())
    }

    pub fn model_status(&self) -> AdapterStatus {
        self.inference.status()
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops all clients, which closes their channels, then waits for every actor task.
    /// Fails if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        // Step 1: Close all channels by dropping clients
        drop(self.todo_client);
        drop(self.item_client);

        // Step 2: Wait for all actor tasks to complete
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(SystemError::ActorTask(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
