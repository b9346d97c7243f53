//! ActorEntity trait implementation for the Product domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that lets a
//! [`Product`] live in a [`ResourceStore`](crate::framework::ResourceStore).

use crate::framework::ActorEntity;
use crate::model::{Product, ProductId, ProductUpdate};

impl ActorEntity for Product {
    type Id = ProductId;
    type Update = ProductUpdate;

    fn id(&self) -> &ProductId {
        &self.id
    }

    /// Handles updates to the Product entity.
    ///
    /// # Fields Updated
    /// - `id`: Store key (the store moves the product when it changes)
    /// - `name`: Product name, an empty string included
    /// - `quantity`: Available stock quantity, zero included
    /// - `price`: Product price, zero included
    fn on_update(&mut self, update: ProductUpdate) {
        if let Some(id) = update.id {
            self.id = id;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
    }
}
