//! Azure OpenAI Chat Handler
//!
//! Forwards chat requests to the deployment's chat-completions endpoint and
//! extracts the first choice's text.

use serde_json::Value;
use tracing::debug;

use super::client::AzureClient;
use super::utils::AzureEndpointType;
use crate::core::fenced_json::parse_fenced_json;
use crate::core::types::ChatRequest;
use crate::utils::error::{Operation, RelayError, Result};

/// Azure OpenAI chat handler
#[derive(Debug, Clone)]
pub struct AzureChatHandler {
    client: AzureClient,
}

impl AzureChatHandler {
    /// Create new chat handler
    pub fn new(client: AzureClient) -> Self {
        Self { client }
    }

    /// Create chat completion and return the first choice's text
    pub async fn create_chat_completion(&self, request: &ChatRequest) -> Result<String> {
        let azure_request =
            AzureChatUtils::transform_request(request, &self.client.get_config().model)?;

        let response = self
            .client
            .post_json(
                Operation::Chat,
                AzureEndpointType::ChatCompletions,
                &azure_request,
            )
            .await?;

        AzureChatUtils::extract_content(&response)
    }

    /// Create chat completion and parse the JSON object fenced in the reply
    pub async fn create_json_completion(&self, request: &ChatRequest) -> Result<Value> {
        let content = self.create_chat_completion(request).await?;
        debug!(content_len = content.len(), "parsing fenced model reply");
        parse_fenced_json(&content)
    }
}

/// Azure chat utilities
pub struct AzureChatUtils;

impl AzureChatUtils {
    /// Transform request to Azure format: the client body plus the model
    pub fn transform_request(request: &ChatRequest, model: &str) -> Result<Value> {
        let mut body = serde_json::to_value(request).map_err(Self::encode_error)?;
        if let Value::Object(map) = &mut body {
            map.insert("model".to_string(), Value::String(model.to_string()));
        }
        Ok(body)
    }

    /// Encoding failures are reported as an invalid request, never as `Parse`
    fn encode_error(err: serde_json::Error) -> RelayError {
        RelayError::bad_request(format!("failed to encode chat request: {}", err))
    }

    /// Extract `choices[0].message.content`
    pub fn extract_content(response: &Value) -> Result<String> {
        let choice = response
            .get("choices")
            .and_then(|c| c.as_array())
            .and_then(|choices| choices.first())
            .ok_or_else(|| {
                RelayError::unexpected_response(Operation::Chat, "response contains no choices")
            })?;

        choice
            .get("message")
            .and_then(|m| m.get("content"))
            .and_then(|c| c.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| {
                RelayError::unexpected_response(
                    Operation::Chat,
                    "first choice has no message content",
                )
            })
    }
}
