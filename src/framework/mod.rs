//! Generic keyed-resource framework.
//!
//! This module provides the building blocks for serving an in-memory keyed store
//! through an actor.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be kept in a store
//! - [`ResourceStore`] - The synchronous store with its add/get/update/delete/list contract
//! - [`ResourceActor`] - Task that owns a store and applies requests one at a time
//! - [`ResourceClient`] - Cloneable async handle for sending requests to the actor
//! - [`StoreError`], [`FrameworkError`] - Error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning an actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::{FrameworkError, StoreError};
pub use message::{ResourceRequest, Response};
pub use store::{DeleteOutcome, ResourceStore};
