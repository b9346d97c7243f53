//! Products held in the inventory.
//!
//! # Actor Framework
//! [`Product`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be kept in a [`ResourceStore`](crate::framework::ResourceStore).
//!
//! See `product_actor::entity` for details on
//! how a [`ProductUpdate`] is applied.

use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Caller-chosen identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub i64);

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Meant to be non-negative; the store does not enforce it.
    pub quantity: i64,
    pub price: f64,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier, chosen by the caller
    /// * `name` - Product name
    /// * `quantity` - Available stock quantity
    /// * `price` - Unit price in US dollars
    pub fn new(id: i64, name: impl Into<String>, quantity: i64, price: f64) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            quantity,
            price,
        }
    }
}

/// Partial update for a Product.
///
/// `None` leaves a field as it is. `Some` replaces it, and `Some(0)`, `Some(0.0)` or
/// `Some(String::new())` are ordinary values, not "no change".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub id: Option<ProductId>,
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}

impl ProductUpdate {
    pub fn id(mut self, id: i64) -> Self {
        self.id = Some(ProductId(id));
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}
