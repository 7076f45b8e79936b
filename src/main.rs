use anyhow::{Context, Result};
use storefront::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable naming the YAML configuration file
const CONFIG_ENV: &str = "STOREFRONT_CONFIG";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => {
            tracing::info!(path = %path, "Loading configuration");
            StorefrontConfig::from_yaml_file(&path)
                .with_context(|| format!("Failed to load configuration from {}", path))?
        }
        Err(_) => {
            tracing::info!("{} not set, using the built-in catalog", CONFIG_ENV);
            StorefrontConfig::default_config()
        }
    };

    let addr = config.server.socket_addr()?;
    tracing::info!(
        products = config.catalog.products.len(),
        videos = config.catalog.videos.len(),
        "Starting storefront"
    );

    StorefrontBuilder::new()
        .with_config(config)
        .serve(addr)
        .await
}
