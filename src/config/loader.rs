//! Configuration loading utilities
//!
//! Values come from the process environment, optionally backed by a dotenv
//! file. A variable set in the process environment always wins over the same
//! variable in the file.

use super::models::*;
use super::RelayConfig;
use crate::core::providers::azure::AzureConfig;
use crate::utils::error::{RelayError, Result};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;

pub const AZURE_OPENAI_API_KEY: &str = "AZURE_OPENAI_API_KEY";
pub const AZURE_OPENAI_ENDPOINT: &str = "AZURE_OPENAI_ENDPOINT";
pub const AZURE_OPENAI_DEPLOYMENT: &str = "AZURE_OPENAI_DEPLOYMENT";
pub const AZURE_OPENAI_IMAGE_DEPLOYMENT: &str = "AZURE_OPENAI_IMAGE_DEPLOYMENT";
pub const AZURE_OPENAI_CHAT_API_VERSION: &str = "AZURE_OPENAI_CHAT_API_VERSION";
pub const AZURE_OPENAI_DALLE_API_VERSION: &str = "AZURE_OPENAI_DALLE_API_VERSION";
pub const AZURE_OPENAI_ASSISTANTS_API_VERSION: &str = "AZURE_OPENAI_ASSISTANTS_API_VERSION";
pub const RELAY_MODEL: &str = "RELAY_MODEL";
pub const RELAY_UPSTREAM_TIMEOUT_SECS: &str = "RELAY_UPSTREAM_TIMEOUT_SECS";
pub const RELAY_HOST: &str = "RELAY_HOST";
pub const CHAT_PORT: &str = "CHAT_PORT";
pub const DALLE_PORT: &str = "DALLE_PORT";
pub const RELAY_CORS_ORIGINS: &str = "RELAY_CORS_ORIGINS";
pub const RELAY_SHUTDOWN_TIMEOUT_SECS: &str = "RELAY_SHUTDOWN_TIMEOUT_SECS";
pub const RUST_LOG: &str = "RUST_LOG";
pub const RELAY_LOG_JSON: &str = "RELAY_LOG_JSON";

impl RelayConfig {
    /// Load configuration from a key lookup
    ///
    /// Empty values are treated as unset. Nothing is validated here; see
    /// [`Validate`](super::Validate).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading relay configuration");
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut azure = AzureConfig::new();
        if let Some(api_key) = get(AZURE_OPENAI_API_KEY) {
            azure.api_key = api_key;
        }
        if let Some(endpoint) = get(AZURE_OPENAI_ENDPOINT) {
            azure.azure_endpoint = endpoint;
        }
        if let Some(deployment) = get(AZURE_OPENAI_DEPLOYMENT) {
            azure.deployment_name = deployment;
        }
        if let Some(deployment) = get(AZURE_OPENAI_IMAGE_DEPLOYMENT) {
            azure.image_deployment_name = deployment;
        }
        if let Some(version) = get(AZURE_OPENAI_CHAT_API_VERSION) {
            azure.chat_api_version = version;
        }
        if let Some(version) = get(AZURE_OPENAI_DALLE_API_VERSION) {
            azure.image_api_version = version;
        }
        if let Some(version) = get(AZURE_OPENAI_ASSISTANTS_API_VERSION) {
            azure.assistants_api_version = version;
        }
        if let Some(model) = get(RELAY_MODEL) {
            azure.model = model;
        }
        if let Some(timeout) = get(RELAY_UPSTREAM_TIMEOUT_SECS) {
            azure.timeout = Some(Duration::from_secs(parse_value(
                RELAY_UPSTREAM_TIMEOUT_SECS,
                &timeout,
            )?));
        }

        let mut server = ServerConfig::default();
        if let Some(host) = get(RELAY_HOST) {
            server.host = host;
        }
        if let Some(port) = get(CHAT_PORT) {
            server.chat_port = parse_value(CHAT_PORT, &port)?;
        }
        if let Some(port) = get(DALLE_PORT) {
            server.image_port = parse_value(DALLE_PORT, &port)?;
        }
        if let Some(origins) = get(RELAY_CORS_ORIGINS) {
            server.cors_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
        if let Some(timeout) = get(RELAY_SHUTDOWN_TIMEOUT_SECS) {
            server.shutdown_timeout = parse_value(RELAY_SHUTDOWN_TIMEOUT_SECS, &timeout)?;
        }

        let mut logging = LoggingConfig::default();
        if let Some(filter) = get(RUST_LOG) {
            logging.filter = filter;
        }
        if let Some(json) = get(RELAY_LOG_JSON) {
            logging.json = parse_bool(RELAY_LOG_JSON, &json)?;
        }

        Ok(Self {
            server,
            azure,
            logging,
            dotenv_vars: None,
        })
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from the process environment, falling back to the
    /// given dotenv file for variables the environment does not set
    pub fn from_env_with_dotenv(path: &Path) -> Result<Self> {
        let file_vars = load_dotenv_file(path)?;
        let mut config = Self::from_lookup(|key| {
            std::env::var(key)
                .ok()
                .or_else(|| file_vars.get(key).cloned())
        })?;
        config.dotenv_vars = path.exists().then_some(file_vars.len());
        Ok(config)
    }
}

/// Read a dotenv file into a map without touching the process environment
///
/// A missing file yields an empty map.
pub fn load_dotenv_file(path: &Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        debug!(path = %path.display(), "No dotenv file found");
        return Ok(HashMap::new());
    }

    let iter = dotenvy::from_path_iter(path).map_err(|e| {
        RelayError::config(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let mut vars = HashMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| {
            RelayError::config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        vars.insert(key, value);
    }

    debug!(path = %path.display(), count = vars.len(), "Loaded dotenv file");
    Ok(vars)
}

fn parse_value<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| RelayError::config(format!("Invalid {}: '{}' ({})", key, value, e)))
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(RelayError::config(format!(
            "Invalid {}: '{}' (expected true or false)",
            key, value
        ))),
    }
}
