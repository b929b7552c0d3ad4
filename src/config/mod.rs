//! Configuration management for the relay
//!
//! The configuration is built once at startup and handed to the server; no
//! handler reads the environment on its own.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::core::providers::azure::AzureConfig;
use crate::utils::error::Result;
use std::path::Path;

/// Main configuration struct for the relay
#[derive(Debug, Clone, Default)]
pub struct RelayConfig {
    /// HTTP listener configuration
    pub server: ServerConfig,
    /// Upstream Azure OpenAI configuration
    pub azure: AzureConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Number of variables read from the dotenv file; `None` when no file
    /// was read
    pub dotenv_vars: Option<usize>,
}

impl RelayConfig {
    /// Load and validate configuration from the environment and an optional
    /// dotenv file
    pub fn load(dotenv_path: Option<&Path>) -> Result<Self> {
        let config = match dotenv_path {
            Some(path) => Self::from_env_with_dotenv(path)?,
            None => Self::from_env()?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Get upstream configuration
    pub fn azure(&self) -> &AzureConfig {
        &self.azure
    }
}
