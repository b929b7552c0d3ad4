//! Server builder and run_server function

use crate::config::RelayConfig;
use crate::core::traits::RelayProvider;
use crate::server::server::HttpServer;
use crate::utils::error::{RelayError, Result};
use std::sync::Arc;
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<RelayConfig>,
    provider: Option<Arc<dyn RelayProvider>>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: RelayConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a provider other than the Azure one built from the configuration
    pub fn with_provider(mut self, provider: Arc<dyn RelayProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| RelayError::config("Configuration is required"))?;

        match self.provider {
            Some(provider) => Ok(HttpServer::with_provider(&config, provider)),
            None => HttpServer::new(&config),
        }
    }
}

/// Build the relay from a loaded configuration and serve until shutdown
pub async fn run_server(config: RelayConfig) -> Result<()> {
    let server = ServerBuilder::new().with_config(config).build()?;

    info!("API endpoints:");
    info!("   GET  /health - Health check");
    info!("   POST /api/generate - Chat relay");
    info!("   POST /api/dalle/image - Image relay");

    server.start().await
}
