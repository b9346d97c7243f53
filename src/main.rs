use inventory_control::config::InventoryConfig;
use inventory_control::console::Session;
use inventory_control::lifecycle::{setup_tracing, InventorySystem};
use tokio::io::BufReader;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = InventoryConfig::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        e.to_string()
    })?;
    info!(?config, "Starting inventory control");

    let system = InventorySystem::new(&config);

    let session = Session::new(
        system.product_client.clone(),
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .with_menu_delay(config.menu_delay);

    let result = session.run().await;
    if let Err(e) = &result {
        error!(error = %e, "Console I/O failed");
    }

    system.shutdown().await?;
    result.map_err(|e| e.to_string())
}
