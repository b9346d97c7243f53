//! # Generic Messages
//!
//! This module defines the request types exchanged between a `ResourceClient` and
//! the `ResourceActor` that owns the store.

use crate::framework::entity::ActorEntity;
use crate::framework::error::StoreError;
use crate::framework::store::DeleteOutcome;
use tokio::sync::oneshot;

/// Type alias for the one-shot reply channel used by actors.
pub type Response<T, Id> = oneshot::Sender<Result<T, StoreError<Id>>>;

/// Request sent to the actor, one variant per store operation.
///
/// Each variant carries its own reply channel, typed by what that operation returns.
/// Because the actor handles requests one at a time, every variant executes as a
/// critical section over the whole store.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Add {
        item: T,
        respond_to: Response<(), T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<T, T::Id>,
    },
    Contains {
        id: T::Id,
        respond_to: oneshot::Sender<bool>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T, T::Id>,
    },
    Delete {
        id: T::Id,
        confirmed: bool,
        respond_to: Response<DeleteOutcome, T::Id>,
    },
    List {
        respond_to: Response<Vec<T>, T::Id>,
    },
}
