//! # Product Actor
//!
//! This module wires the Product resource into the generic framework.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`ProductStore`] - The synchronous store specialised to products
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use inventory_control::clients::ProductClient;
//! use inventory_control::model::{Product, ProductId, ProductUpdate};
//! use inventory_control::product_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create actor and client
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!
//!     // Start the actor
//!     tokio::spawn(actor.run());
//!
//!     client.add_product(Product::new(1, "Widget", 10, 9.99)).await?;
//!     let product = client
//!         .update_product(ProductId(1), ProductUpdate::default().quantity(0))
//!         .await?;
//!     assert_eq!(product.quantity, 0);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::framework::{ResourceActor, ResourceClient, ResourceStore};
use crate::model::Product;

/// The in-memory product inventory.
pub type ProductStore = ResourceStore<Product>;

/// Creates a new Product actor with an empty inventory, and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
