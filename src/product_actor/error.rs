//! Error types for the Product actor.

use crate::framework::{FrameworkError, StoreError};
use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// Another product already uses this ID.
    #[error("Product ID #{0} already exists")]
    DuplicateId(ProductId),

    /// The requested product was not found.
    #[error("Product ID #{0} not found")]
    NotFound(ProductId),

    /// A listing was requested while the inventory is empty.
    #[error("No products found in the inventory")]
    EmptyInventory,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for ProductError {
    fn from(msg: String) -> Self {
        ProductError::ActorCommunicationError(msg)
    }
}

impl From<StoreError<ProductId>> for ProductError {
    fn from(e: StoreError<ProductId>) -> Self {
        match e {
            StoreError::DuplicateId(id) => ProductError::DuplicateId(id),
            StoreError::NotFound(id) => ProductError::NotFound(id),
            StoreError::EmptyStore => ProductError::EmptyInventory,
        }
    }
}

impl From<FrameworkError<ProductId>> for ProductError {
    fn from(e: FrameworkError<ProductId>) -> Self {
        match e {
            FrameworkError::Store(e) => e.into(),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
