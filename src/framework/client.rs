//! # Generic Client
//!
//! This module defines the generic client for communicating with a `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::{FrameworkError, StoreError};
use crate::framework::message::ResourceRequest;
use crate::framework::store::DeleteOutcome;
use tokio::sync::{mpsc, oneshot};

/// ## ResourceClient
///
/// The `ResourceClient<T>` provides a typed, async API over a `ResourceActor<T>`. Each
/// call sends one request over a Tokio mpsc channel and awaits the reply on a oneshot
/// channel.
///
/// * **Cloneable**: holds only a sender, so cloning is inexpensive.
/// * **Failures**: `ActorClosed` when the actor is gone, `ActorDropped` when it dropped
///   the reply, `Store` for the store's own contract errors.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

type ClientResult<R, T> = Result<R, FrameworkError<<T as ActorEntity>::Id>>;

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        request: ResourceRequest<T>,
        response: oneshot::Receiver<Result<R, StoreError<T::Id>>>,
    ) -> ClientResult<R, T> {
        self.sender
            .send(request)
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        let result = response.await.map_err(|_| FrameworkError::ActorDropped)?;
        Ok(result?)
    }

    pub async fn add(&self, item: T) -> ClientResult<(), T> {
        let (respond_to, response) = oneshot::channel();
        self.request(ResourceRequest::Add { item, respond_to }, response)
            .await
    }

    pub async fn get(&self, id: T::Id) -> ClientResult<T, T> {
        let (respond_to, response) = oneshot::channel();
        self.request(ResourceRequest::Get { id, respond_to }, response)
            .await
    }

    pub async fn contains(&self, id: T::Id) -> ClientResult<bool, T> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Contains { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> ClientResult<T, T> {
        let (respond_to, response) = oneshot::channel();
        self.request(
            ResourceRequest::Update {
                id,
                update,
                respond_to,
            },
            response,
        )
        .await
    }

    pub async fn delete_if_confirmed(
        &self,
        id: T::Id,
        confirmed: bool,
    ) -> ClientResult<DeleteOutcome, T> {
        let (respond_to, response) = oneshot::channel();
        self.request(
            ResourceRequest::Delete {
                id,
                confirmed,
                respond_to,
            },
            response,
        )
        .await
    }

    pub async fn list(&self) -> ClientResult<Vec<T>, T> {
        let (respond_to, response) = oneshot::channel();
        self.request(ResourceRequest::List { respond_to }, response)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::ResourceActor;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: String,
        value: i64,
    }

    #[derive(Debug)]
    struct CounterUpdate {
        value: Option<i64>,
    }

    impl ActorEntity for Counter {
        type Id = String;
        type Update = CounterUpdate;

        fn id(&self) -> &String {
            &self.id
        }

        fn on_update(&mut self, update: CounterUpdate) {
            if let Some(value) = update.value {
                self.value = value;
            }
        }
    }

    #[tokio::test]
    async fn test_resource_actor_round_trip() {
        let (actor, client) = ResourceActor::<Counter>::new(10);
        let handle = tokio::spawn(actor.run());

        let counter = Counter {
            id: "hits".into(),
            value: 5,
        };
        client.add(counter.clone()).await.unwrap();
        assert_eq!(client.get("hits".into()).await.unwrap(), counter);
        assert!(client.contains("hits".into()).await.unwrap());

        let updated = client
            .update("hits".into(), CounterUpdate { value: Some(0) })
            .await
            .unwrap();
        assert_eq!(updated.value, 0);

        let outcome = client.delete_if_confirmed("hits".into(), true).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Removed);
        assert!(matches!(
            client.list().await,
            Err(FrameworkError::Store(StoreError::EmptyStore))
        ));

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = ResourceActor::<Counter>::new(1);
        drop(actor);
        assert!(matches!(
            client.list().await,
            Err(FrameworkError::ActorClosed)
        ));
    }
}
