mod domain;
mod clients;
mod pricing;
mod seed;

mod app_system;
mod api;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod product_actor;
mod coupon_actor;
mod settings_actor;
mod order_actor;

use tracing::{error, info};
use crate::app_system::{setup_tracing, Config, StorefrontSystem};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::load().map_err(|e| e.to_string())?;
    info!(?config, "Starting Urban Bites storefront");

    // Create the entire storefront system (starts all stores)
    let system = StorefrontSystem::new(config.channel_buffer);

    if config.seed_demo_data {
        match seed::seed_demo_data(&system).await {
            Ok(true) => info!("Demo menu loaded"),
            Ok(false) => {}
            Err(e) => error!(error = %e, "Seeding demo data failed"),
        }
    }

    let served = api::serve(&config, &system).await;
    if let Err(e) = &served {
        error!(error = %e, "Server stopped with an error");
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    served.map_err(|e| e.to_string())?;
    info!("Application completed successfully");
    Ok(())
}
