//! Configuration validation

use super::models::*;
use super::RelayConfig;
use crate::utils::error::{RelayError, Result};
use tracing::debug;

/// Validation for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for RelayConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating relay configuration");

        self.server.validate()?;
        self.azure.validate().map_err(RelayError::Config)?;
        self.logging.validate()?;

        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(RelayError::config("Server host cannot be empty"));
        }

        if self.chat_port == 0 {
            return Err(RelayError::config("Chat port must be greater than 0"));
        }

        if self.image_port == 0 {
            return Err(RelayError::config("Image port must be greater than 0"));
        }

        for origin in &self.cors_origins {
            if origin != "*" && !is_bare_origin(origin) {
                return Err(RelayError::config(format!(
                    "CORS origin must be '*' or scheme://host[:port] without a path, got '{}'",
                    origin
                )));
            }
        }

        if self.shutdown_timeout > 3600 {
            return Err(RelayError::config(
                "Shutdown timeout should not exceed 1 hour",
            ));
        }

        Ok(())
    }
}

/// Browsers send `Origin` as `scheme://host[:port]`; anything else never matches
fn is_bare_origin(origin: &str) -> bool {
    let host = origin
        .strip_prefix("http://")
        .or_else(|| origin.strip_prefix("https://"));
    matches!(host, Some(h) if !h.is_empty() && !h.contains('/'))
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<()> {
        if self.filter.trim().is_empty() {
            return Err(RelayError::config("Log filter cannot be empty"));
        }
        Ok(())
    }
}
