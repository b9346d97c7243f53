//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the task that owns a [`ResourceStore`] and
//! applies requests to it one at a time.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::message::ResourceRequest;
use crate::framework::store::ResourceStore;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that serializes access to one store.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the store and the receiver
/// end of the channel. Requests are handled sequentially, so the store needs no
/// `Mutex`: exclusive ownership inside the task is the lock.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2.  **Run**: spawn `actor.run()` on the runtime.
/// 3.  **Stop**: drop every client; the loop ends once the channel is closed.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: ResourceStore<T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` with an empty store, and its `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. When it is full, client calls
    ///   wait for room.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: ResourceStore::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing requests until the channel closes.
    pub async fn run(mut self) {
        // Extract just the type name (e.g. "Product" instead of "inventory_control::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Add { item, respond_to } => {
                    debug!(entity_type, ?item, "Add");
                    let id = item.id().clone();
                    let result = self.store.add(item);
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.store.len(), "Added"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Add failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let result = self.store.get(&id);
                    debug!(entity_type, %id, found = result.is_ok(), "Get");
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Contains { id, respond_to } => {
                    let found = self.store.contains(&id);
                    debug!(entity_type, %id, found, "Contains");
                    let _ = respond_to.send(found);
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.store.update(&id, update);
                    match &result {
                        Ok(item) => info!(entity_type, %id, new_id = %item.id(), "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete {
                    id,
                    confirmed,
                    respond_to,
                } => {
                    debug!(entity_type, %id, confirmed, "Delete");
                    let result = self.store.delete_if_confirmed(&id, confirmed);
                    match &result {
                        Ok(outcome) => {
                            info!(entity_type, %id, ?outcome, size = self.store.len(), "Deleted")
                        }
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(self.store.list());
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
