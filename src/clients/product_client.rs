//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes inventory-specific methods.
use crate::clients::actor_client::ActorClient;
use crate::framework::{DeleteOutcome, FrameworkError, ResourceClient};
use crate::model::{Product, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError<ProductId>) -> Self::Error {
        e.into()
    }
}

impl ProductClient {
    /// Add a fully populated product. Fails with `DuplicateId` if its ID is taken.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn add_product(&self, product: Product) -> Result<(), ProductError> {
        debug!(?product, "add_product called");
        self.inner.add(product).await.map_err(Self::map_error)
    }

    /// Fetch a copy of the product stored under `id`.
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id).await
    }

    /// Check whether `id` is in the inventory, typically before asking for a
    /// delete confirmation.
    #[instrument(skip(self))]
    pub async fn product_exists(&self, id: ProductId) -> Result<bool, ProductError> {
        self.exists(id).await
    }

    /// Apply a partial update, possibly moving the product to a new ID.
    ///
    /// Returns the product as stored after the update.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Delete the product under `id` if the caller confirmed it.
    #[instrument(skip(self))]
    pub async fn delete_product(
        &self,
        id: ProductId,
        confirmed: bool,
    ) -> Result<DeleteOutcome, ProductError> {
        debug!("Sending request");
        self.inner
            .delete_if_confirmed(id, confirmed)
            .await
            .map_err(Self::map_error)
    }

    /// List every product. An empty inventory is reported as `EmptyInventory`.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        self.inner.list().await.map_err(Self::map_error)
    }
}
