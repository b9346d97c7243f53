//! # Mock Helpers
//!
//! Utilities for testing client wrappers without spawning a `ResourceActor`.
//!
//! [`create_mock_client`] hands back a real [`ResourceClient`] together with the
//! receiving end of its channel. The test then plays the actor: it pulls the next
//! request off the channel with one of the `expect_*` helpers, asserts on its payload,
//! and answers through the returned responder. This makes error injection trivial.
//!
//! ```rust,ignore
//! let (client, mut receiver) = create_mock_client::<Product>(10);
//! let product_client = ProductClient::new(client);
//!
//! let task = tokio::spawn(async move { product_client.list_products().await });
//!
//! let responder = expect_list(&mut receiver).await.expect("Expected List request");
//! responder.send(Err(StoreError::EmptyStore)).unwrap();
//!
//! assert!(task.await.unwrap().is_err());
//! ```

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::message::{ResourceRequest, Response};
use crate::framework::store::DeleteOutcome;
use tokio::sync::{mpsc, oneshot};

/// Creates a client wired to a channel the test controls.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Add request
pub async fn expect_add<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, Response<(), T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Add { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<T, T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Contains request
pub async fn expect_contains<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<bool>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Contains { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, Response<T, T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, bool, Response<DeleteOutcome, T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete {
            id,
            confirmed,
            respond_to,
        }) => Some((id, confirmed, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>, T::Id>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}
