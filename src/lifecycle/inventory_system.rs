use crate::clients::ProductClient;
use crate::config::InventoryConfig;
use tracing::{error, info};

/// The runtime orchestrator for the inventory.
///
/// `InventorySystem` is responsible for:
/// - **Lifecycle Management**: Starting the product actor and stopping it again
/// - **Ownership**: Holding the one client handed to the console, instead of a
///   process-wide store
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::new(&InventoryConfig::default());
///
/// system.product_client.add_product(Product::new(1, "Widget", 10, 9.99)).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// Creates the product actor with an empty inventory and spawns it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &InventoryConfig) -> Self {
        let (product_actor, client) = crate::product_actor::new(config.channel_capacity);
        let handle = tokio::spawn(product_actor.run());

        Self {
            product_client: ProductClient::new(client),
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the actor's channel; the actor finishes the requests
    /// already queued and exits. Clones of the client handed out elsewhere keep the
    /// actor alive until they are dropped too.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down inventory...");

        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Inventory shutdown complete.");
        Ok(())
    }
}
