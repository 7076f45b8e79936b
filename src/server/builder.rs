//! StorefrontBuilder for fluent API to build the HTTP server

use super::host::StorefrontHost;
use super::rest::RestExposure;
use crate::config::StorefrontConfig;
use crate::core::{EventBus, IdentityProvider, MockIdentityProvider};
use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for the storefront server
///
/// # Example
///
/// ```ignore
/// let app = StorefrontBuilder::new()
///     .with_config(StorefrontConfig::from_yaml_file("storefront.yaml")?)
///     .with_identity_provider(MockIdentityProvider::default())
///     .build()?;
/// ```
pub struct StorefrontBuilder {
    config: Option<StorefrontConfig>,
    identity: Option<Arc<dyn IdentityProvider>>,
    custom_routes: Vec<Router>,
    event_bus: Option<EventBus>,
    autostart: bool,
}

impl StorefrontBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            identity: None,
            custom_routes: Vec::new(),
            event_bus: None,
            autostart: true,
        }
    }

    /// Use this configuration instead of the built-in catalog
    pub fn with_config(mut self, config: StorefrontConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Inject the identity provider used by the login flow
    ///
    /// Defaults to a [`MockIdentityProvider`] built from the `identity`
    /// configuration section.
    pub fn with_identity_provider(mut self, provider: impl IdentityProvider + 'static) -> Self {
        self.identity = Some(Arc::new(provider));
        self
    }

    /// Merge extra routes into the router
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Set the slide change channel capacity (default 64)
    pub fn with_event_bus(mut self, capacity: usize) -> Self {
        self.event_bus = Some(EventBus::new(capacity));
        self
    }

    /// Leave the rotators stopped when building the router
    pub fn without_autostart(mut self) -> Self {
        self.autostart = false;
        self
    }

    /// Validate the configuration and build the host
    pub fn build_host(mut self) -> Result<StorefrontHost> {
        let config = self.config.take().unwrap_or_default();
        config.check()?;

        let identity = self.identity.take().unwrap_or_else(|| {
            let settings = &config.identity;
            Arc::new(MockIdentityProvider::new(
                settings.provider.clone(),
                settings.authorize_endpoint.clone(),
                settings.client_id.clone(),
            ))
        });
        let event_bus = self.event_bus.take().unwrap_or_default();

        StorefrontHost::from_config(config, identity, event_bus)
    }

    /// Build the router, starting the rotators unless disabled
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let autostart = self.autostart;
        let host = Arc::new(self.build_host()?);
        if autostart {
            host.activate();
        }
        RestExposure::build_router(host, custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// Handles SIGTERM and Ctrl+C. The rotators stop when the router, and
    /// with it the host, is dropped.
    pub async fn serve(self, addr: SocketAddr) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Storefront listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for StorefrontBuilder {
    fn default() -> Self {
        Self::new()
    }
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
