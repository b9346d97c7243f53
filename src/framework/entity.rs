//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a record type must satisfy to be kept in a
//! [`ResourceStore`](crate::framework::ResourceStore) and served by a
//! [`ResourceActor`](crate::framework::ResourceActor).
//!
//! Unlike stores that mint their own identifiers, entities here carry a caller-chosen
//! key. The trait therefore exposes the key an entity is stored under; an update that
//! changes that key moves the entity to a different key (a *re-key*).
//!
//! # Partial Updates
//! `Update` is a partial-update object. Every field in it is either absent (leave the
//! current value alone) or present with a value, and a present zero or empty value is a
//! real assignment. Implementations of [`ActorEntity::on_update`] must honor that.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any keyed record must implement to be managed by a `ResourceStore`.
///
/// # Architecture Note
/// The store, the actor loop, and the client are written once against this trait.
/// Associated types keep every operation typed: a `Product` store only accepts a
/// `ProductUpdate`, and its keys are always `ProductId`s.
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique key for this entity (e.g. `ProductId`).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The partial-update payload accepted by [`ActorEntity::on_update`].
    type Update: Send + Sync + Debug;

    /// The key this entity is stored under.
    fn id(&self) -> &Self::Id;

    /// Applies every present field of `update` to `self`, including the key.
    ///
    /// Called on a working copy, never on the stored value, so a failed update can't
    /// leave a half-applied entity behind. If the copy's [`ActorEntity::id`] changes,
    /// the store treats the update as a re-key.
    fn on_update(&mut self, update: Self::Update);
}
