use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use storefront_rs::{
    create_app,
    handlers::ApiState,
    init_observability,
    repositories::{InMemoryCartRepository, InMemoryProductRepository},
    services::{CartService, CatalogService},
    shutdown_observability, Config, Metrics,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_environment().context("Failed to load configuration")?;

    init_observability(&config.observability)?;

    info!(
        "Starting {} v{}",
        config.observability.service_name, config.observability.service_version
    );

    let metrics = Arc::new(Metrics::new()?);

    // Rejects a seed catalog with duplicate ids or inconsistent prices.
    let product_repository = Arc::new(
        InMemoryProductRepository::seeded().context("Seed catalog failed integrity check")?,
    );
    let cart_repository = Arc::new(InMemoryCartRepository::new());

    let catalog_service = Arc::new(CatalogService::new(product_repository.clone()));
    info!(
        "Catalog ready with {} products",
        catalog_service.product_count().await?
    );
    let cart_service = Arc::new(CartService::new(cart_repository, product_repository));

    let app = create_app(
        &config.server,
        ApiState::new(catalog_service, cart_service, metrics),
    );

    let addr = config.server.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on {}", addr);
    info!("API available at http://{}/api", addr);

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Shutdown signal received");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    shutdown_observability().await;

    info!("Server shutdown complete");
    Ok(())
}
