//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a [`CollectionStore`] and
//! processes requests against it one at a time. It is the "Server" side of the Actor Model.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::store::CollectionStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct owns the state (`store`) and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Requests may arrive from any number of tasks, but the actor processes its messages
/// *sequentially* in a loop. No `Mutex` or `RwLock` guards the `store`: exclusive ownership
/// inside the task gives every caller the behavior of a single-threaded collection.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the run loop in a background task.
///
/// # Operations
///
/// * **Create**: allocates `store.next_id()`, builds the entity, runs `on_create`, inserts it.
/// * **Replace / Update**: applies the change to a *copy* of the record and commits it only if
///   the hook succeeds, so a failed update never leaves a half-written record behind.
/// * **Delete**: runs `on_delete`, then removes and returns the record.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: CollectionStore<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. When it is full, client calls wait
    /// until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: CollectionStore::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The `context` argument is injected into every async entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Todo" instead of "crud_recipe::model::todo::Todo")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = self.store.next_id();

                    match T::from_create_params(id, params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            let result = self.store.insert(item.clone()).map(|()| item);
                            match &result {
                                Ok(_) => info!(entity_type, %id, size = self.store.len(), "Created"),
                                Err(e) => warn!(entity_type, %id, error = %e, "Create failed"),
                            }
                            let _ = respond_to.send(result);
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { limit, respond_to } => {
                    let items = self.store.list(limit).to_vec();
                    debug!(entity_type, ?limit, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Replace {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?params, "Replace");
                    let result = self.commit(&id, |item| item.on_replace(params));
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Replaced"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Replace failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.commit(&id, |item| item.on_update(update));
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let result = self
                        .store
                        .delete(&id)
                        .ok_or_else(|| FrameworkError::NotFound(id.to_string()));
                    if result.is_ok() {
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Query { query, respond_to } => {
                    debug!(entity_type, ?query, "Query");
                    let result = T::query(self.store.records(), query);
                    let _ = respond_to.send(Ok(result));
                }
                ResourceRequest::Clear { respond_to } => {
                    let removed = self.store.clear();
                    info!(entity_type, removed, "Cleared");
                    let _ = respond_to.send(Ok(removed));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Applies `change` to a copy of the record and stores the copy only on success.
    fn commit(
        &mut self,
        id: &T::Id,
        change: impl FnOnce(&mut T) -> Result<(), T::Error>,
    ) -> Result<T, FrameworkError> {
        let outcome = self.store.update_in_place(id, |item| {
            let mut next = item.clone();
            change(&mut next)?;
            *item = next.clone();
            Ok::<T, T::Error>(next)
        });
        match outcome {
            Some(Ok(item)) => Ok(item),
            Some(Err(e)) => Err(FrameworkError::EntityError(Box::new(e))),
            None => Err(FrameworkError::NotFound(id.to_string())),
        }
    }
}
