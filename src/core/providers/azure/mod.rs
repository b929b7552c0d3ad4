//! Azure OpenAI Provider
//!
//! Azure OpenAI integration for the relay using the RelayProvider trait

pub mod chat;
pub mod client;
pub mod config;
pub mod error;
pub mod image;
pub mod utils;

pub use chat::{AzureChatHandler, AzureChatUtils};
pub use client::{AzureClient, AzureRateLimitInfo};
pub use config::AzureConfig;
pub use error::{azure_api_error, azure_config_error, azure_header_error};
pub use image::{AzureImageHandler, AzureImageUtils};
pub use utils::{AzureEndpointType, AzureUtils};

use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

use crate::core::traits::RelayProvider;
use crate::core::types::ChatRequest;
use crate::utils::error::Result;

/// Main Azure OpenAI provider
#[derive(Debug, Clone)]
pub struct AzureOpenAIProvider {
    chat_handler: AzureChatHandler,
    image_handler: AzureImageHandler,
}

impl AzureOpenAIProvider {
    /// Create new Azure OpenAI provider
    pub fn new(config: AzureConfig) -> Result<Self> {
        let client = AzureClient::new(config)?;
        info!(
            endpoint = %client.get_config().azure_endpoint,
            deployment = %client.get_config().deployment_name,
            image_deployment = %client.get_config().image_deployment_name,
            "Azure OpenAI provider ready"
        );

        Ok(Self {
            chat_handler: AzureChatHandler::new(client.clone()),
            image_handler: AzureImageHandler::new(client),
        })
    }
}

#[async_trait]
impl RelayProvider for AzureOpenAIProvider {
    fn name(&self) -> &'static str {
        "azure"
    }

    async fn generate_json(&self, request: &ChatRequest) -> Result<Value> {
        self.chat_handler.create_json_completion(request).await
    }

    async fn generate_image(&self, prompt: &str) -> Result<String> {
        self.image_handler.generate_image(prompt).await
    }
}
