//! # Framework Errors
//!
//! This module defines the error types shared by the store, the actor, and the client.
//! [`StoreError`] is the store's own contract (duplicate key, missing key, empty store);
//! [`FrameworkError`] adds the ways a request can fail to reach the actor at all.

use std::fmt::{Debug, Display};

/// Contract failures reported by a [`ResourceStore`](crate::framework::ResourceStore).
///
/// None of these are fatal. They are deterministic given the current store contents,
/// so retrying without changing the store gives the same answer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError<Id: Debug + Display> {
    /// An add or a re-keying update targets a key that is already taken.
    #[error("ID #{0} already exists")]
    DuplicateId(Id),

    /// A get, update, or delete targets a key that is not in the store.
    #[error("ID #{0} not found")]
    NotFound(Id),

    /// A listing was requested while the store holds nothing.
    #[error("No items found in the store")]
    EmptyStore,
}

/// Errors seen by callers of a [`ResourceClient`](crate::framework::ResourceClient).
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError<Id: Debug + Display> {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("{0}")]
    Store(StoreError<Id>),
}

impl<Id: Debug + Display> From<StoreError<Id>> for FrameworkError<Id> {
    fn from(e: StoreError<Id>) -> Self {
        FrameworkError::Store(e)
    }
}
