//! Application state shared across HTTP handlers

use crate::config::RelayConfig;
use crate::core::traits::RelayProvider;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Both fields are read-only after startup. Every worker thread holds a clone
/// of the same `Arc`s, so requests never share mutable state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Relay configuration
    pub config: Arc<RelayConfig>,
    /// Upstream provider
    pub provider: Arc<dyn RelayProvider>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: RelayConfig, provider: Arc<dyn RelayProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }

    /// Get relay configuration
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}
