//! Azure OpenAI Configuration
//!
//! Configuration for Azure OpenAI Service

use serde::Serialize;
use std::time::Duration;

/// Default API version for chat and image endpoints
pub const DEFAULT_API_VERSION: &str = "2024-02-01";
/// Default API version for the assistants endpoint
pub const DEFAULT_ASSISTANTS_API_VERSION: &str = "2024-05-01-preview";
/// Default image deployment
pub const DEFAULT_IMAGE_DEPLOYMENT: &str = "dall-e-3";
/// Default model identifier added to every chat request
pub const DEFAULT_MODEL: &str = "gpt-4";

/// Azure OpenAI configuration
#[derive(Debug, Clone, Serialize)]
pub struct AzureConfig {
    /// Azure API key, sent as the `api-key` header
    #[serde(skip_serializing)]
    pub api_key: String,
    /// Azure endpoint URL, e.g. `https://my-resource.openai.azure.com`
    pub azure_endpoint: String,
    /// Chat deployment name
    pub deployment_name: String,
    /// Image (DALL-E) deployment name
    pub image_deployment_name: String,
    /// API version for chat completions
    pub chat_api_version: String,
    /// API version for image generation
    pub image_api_version: String,
    /// API version for assistants
    pub assistants_api_version: String,
    /// Model identifier added to forwarded chat requests
    pub model: String,
    /// Upstream request timeout; `None` keeps the HTTP client default
    pub timeout: Option<Duration>,
}

impl Default for AzureConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            azure_endpoint: String::new(),
            deployment_name: String::new(),
            image_deployment_name: DEFAULT_IMAGE_DEPLOYMENT.to_string(),
            chat_api_version: DEFAULT_API_VERSION.to_string(),
            image_api_version: DEFAULT_API_VERSION.to_string(),
            assistants_api_version: DEFAULT_ASSISTANTS_API_VERSION.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
        }
    }
}

impl AzureConfig {
    /// Create new Azure configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Set Azure endpoint
    pub fn with_azure_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.azure_endpoint = endpoint.into();
        self
    }

    /// Set chat deployment name
    pub fn with_deployment_name(mut self, deployment: impl Into<String>) -> Self {
        self.deployment_name = deployment.into();
        self
    }

    /// Set image deployment name
    pub fn with_image_deployment_name(mut self, deployment: impl Into<String>) -> Self {
        self.image_deployment_name = deployment.into();
        self
    }

    /// Set chat API version
    pub fn with_chat_api_version(mut self, version: impl Into<String>) -> Self {
        self.chat_api_version = version.into();
        self
    }

    /// Set image API version
    pub fn with_image_api_version(mut self, version: impl Into<String>) -> Self {
        self.image_api_version = version.into();
        self
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set upstream timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.api_key.trim().is_empty() {
            return Err("Azure API key is required".to_string());
        }

        if self.azure_endpoint.trim().is_empty() {
            return Err("Azure endpoint is required".to_string());
        }

        if !self.azure_endpoint.starts_with("http://")
            && !self.azure_endpoint.starts_with("https://")
        {
            return Err(format!(
                "Azure endpoint must be an http(s) URL, got '{}'",
                self.azure_endpoint
            ));
        }

        if self.deployment_name.trim().is_empty() {
            return Err("Azure deployment name is required".to_string());
        }

        if self.image_deployment_name.trim().is_empty() {
            return Err("Azure image deployment name cannot be empty".to_string());
        }

        for (name, version) in [
            ("chat", &self.chat_api_version),
            ("image", &self.image_api_version),
            ("assistants", &self.assistants_api_version),
        ] {
            if version.trim().is_empty() {
                return Err(format!("{} API version is required", name));
            }
        }

        if self.model.trim().is_empty() {
            return Err("Model identifier cannot be empty".to_string());
        }

        if self.timeout == Some(Duration::ZERO) {
            return Err("Upstream timeout cannot be 0".to_string());
        }

        Ok(())
    }
}
