//! Azure OpenAI Image Generation Handler
//!
//! DALL-E image generation with fixed parameters

use serde_json::Value;

use super::client::AzureClient;
use super::utils::AzureEndpointType;
use crate::core::types::ImageGenerationParams;
use crate::utils::error::{Operation, RelayError, Result};

/// Azure OpenAI image generation handler
#[derive(Debug, Clone)]
pub struct AzureImageHandler {
    client: AzureClient,
}

impl AzureImageHandler {
    /// Create new image generation handler
    pub fn new(client: AzureClient) -> Self {
        Self { client }
    }

    /// Generate one image and return its URL
    pub async fn generate_image(&self, prompt: &str) -> Result<String> {
        let params = ImageGenerationParams::new(prompt);

        let response = self
            .client
            .post_json(Operation::Image, AzureEndpointType::Images, &params)
            .await?;

        AzureImageUtils::extract_first_url(&response)
    }
}

/// Azure image generation utilities
pub struct AzureImageUtils;

impl AzureImageUtils {
    /// Extract `data[0].url`
    ///
    /// A missing or empty `data` array means no image was generated.
    pub fn extract_first_url(response: &Value) -> Result<String> {
        let first = response
            .get("data")
            .and_then(|d| d.as_array())
            .and_then(|data| data.first())
            .ok_or(RelayError::NoImages)?;

        first
            .get("url")
            .and_then(|u| u.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| {
                RelayError::unexpected_response(Operation::Image, "generated image has no url")
            })
    }
}
