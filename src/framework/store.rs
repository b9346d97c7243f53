//! # Keyed Resource Store
//!
//! `ResourceStore<T>` is the synchronous, in-memory collection behind every actor.
//! It owns its entities outright: reads hand out clones, so nothing outside the store
//! can mutate what it holds.
//!
//! ## Operations
//!
//! * **Add**: inserts a fully populated entity, failing on a taken key.
//! * **Get**: returns a clone of the entity under a key.
//! * **Update**: applies a partial update, optionally moving the entity to a new key.
//! * **Delete**: two steps, [`ResourceStore::contains`] followed by
//!   [`ResourceStore::delete_if_confirmed`] once the caller has a yes/no decision.
//! * **List**: every entity, in no particular order.
//!
//! The store never performs I/O. Confirmation prompts and display belong to callers.

use crate::framework::entity::ActorEntity;
use crate::framework::error::StoreError;
use std::collections::HashMap;

/// Outcome of [`ResourceStore::delete_if_confirmed`] for a key that exists.
///
/// A missing key is reported as [`StoreError::NotFound`], which keeps the three
/// outcomes (removed, canceled, not found) distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The entity was removed.
    Removed,
    /// The caller declined; the store is unchanged.
    Canceled,
}

/// In-memory map from key to entity.
///
/// Invariant: every stored entity's own [`ActorEntity::id`] equals the key it is
/// stored under.
#[derive(Debug, Clone)]
pub struct ResourceStore<T: ActorEntity> {
    items: HashMap<T::Id, T>,
}

impl<T: ActorEntity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> ResourceStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Inserts `item` under its own key. Nothing is inserted on failure.
    pub fn add(&mut self, item: T) -> Result<(), StoreError<T::Id>> {
        let id = item.id();
        if self.items.contains_key(id) {
            return Err(StoreError::DuplicateId(id.clone()));
        }
        self.items.insert(id.clone(), item);
        Ok(())
    }

    /// Returns a copy of the entity stored under `id`.
    pub fn get(&self, id: &T::Id) -> Result<T, StoreError<T::Id>> {
        self.items
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.items.contains_key(id)
    }

    /// Applies `update` to the entity under `id` and returns the new state.
    ///
    /// When the updated entity ends up with a different key, it is moved there, provided
    /// the key is free. The new state is built on a copy and its key checked before the
    /// map is touched, so either the whole update lands or none of it does.
    pub fn update(&mut self, id: &T::Id, update: T::Update) -> Result<T, StoreError<T::Id>> {
        let mut updated = self
            .items
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        updated.on_update(update);

        let new_id = updated.id();
        if new_id != id {
            if self.items.contains_key(new_id) {
                return Err(StoreError::DuplicateId(new_id.clone()));
            }
            self.items.remove(id);
        }
        self.items.insert(updated.id().clone(), updated.clone());
        Ok(updated)
    }

    /// Removes the entity under `id` if `confirmed`, otherwise leaves it in place.
    pub fn delete_if_confirmed(
        &mut self,
        id: &T::Id,
        confirmed: bool,
    ) -> Result<DeleteOutcome, StoreError<T::Id>> {
        if !self.items.contains_key(id) {
            return Err(StoreError::NotFound(id.clone()));
        }
        if !confirmed {
            return Ok(DeleteOutcome::Canceled);
        }
        self.items.remove(id);
        Ok(DeleteOutcome::Removed)
    }

    /// Returns every entity. An empty store is reported as [`StoreError::EmptyStore`].
    pub fn list(&self) -> Result<Vec<T>, StoreError<T::Id>> {
        if self.items.is_empty() {
            return Err(StoreError::EmptyStore);
        }
        Ok(self.items.values().cloned().collect())
    }
}
