//! Server configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Server configuration
///
/// The relay listens on two ports, nominally one for chat and one for image
/// generation. Both serve the same route table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen host
    #[serde(default = "default_host")]
    pub host: String,
    /// Port of the chat listener
    #[serde(default = "default_chat_port")]
    pub chat_port: u16,
    /// Port of the image listener
    #[serde(default = "default_image_port")]
    pub image_port: u16,
    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
    /// Seconds to drain in-flight requests on shutdown
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            chat_port: default_chat_port(),
            image_port: default_image_port(),
            cors_origins: Vec::new(),
            shutdown_timeout: default_shutdown_timeout(),
        }
    }
}

impl ServerConfig {
    /// Addresses to bind, without duplicates
    pub fn addresses(&self) -> Vec<String> {
        let mut addresses = vec![format!("{}:{}", self.host, self.chat_port)];
        if self.image_port != self.chat_port {
            addresses.push(format!("{}:{}", self.host, self.image_port));
        }
        addresses
    }

    /// Whether any origin may call the relay
    pub fn allows_all_origins(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}
