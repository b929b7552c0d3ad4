//! Test fixtures and data factories

use actix_web::web;
use azure_relay::server::AppState;
use azure_relay::{AzureOpenAIProvider, RelayConfig, RelayProvider};
use serde_json::{Value, json};
use std::sync::Arc;

pub const TEST_API_KEY: &str = "test-azure-key";
pub const TEST_DEPLOYMENT: &str = "gpt4-test";
pub const TEST_IMAGE_DEPLOYMENT: &str = "dalle3-test";

/// Relay configuration pointing at the given upstream base URL
pub fn relay_config(endpoint: &str) -> RelayConfig {
    let mut config = RelayConfig::default();
    config.azure.api_key = TEST_API_KEY.to_string();
    config.azure.azure_endpoint = endpoint.to_string();
    config.azure.deployment_name = TEST_DEPLOYMENT.to_string();
    config.azure.image_deployment_name = TEST_IMAGE_DEPLOYMENT.to_string();
    config
}

/// Application state backed by the real Azure provider
pub fn app_state(config: RelayConfig) -> web::Data<AppState> {
    let provider = AzureOpenAIProvider::new(config.azure().clone())
        .expect("test configuration should be valid");
    let provider: Arc<dyn RelayProvider> = Arc::new(provider);
    web::Data::new(AppState::new(config, provider))
}

/// Factory for client chat bodies
pub struct ChatBodyFactory;

impl ChatBodyFactory {
    /// The shape the browser app sends
    pub fn simulation(topic: &str) -> Value {
        json!({
            "messages": [
                {"role": "system", "content": "Answer with one JSON object in a ```json block."},
                {"role": "user", "content": format!("Build a simulation of {}", topic)}
            ],
            "temperature": 0.7,
            "max_tokens": 800
        })
    }

    /// A body carrying fields the relay does not model
    pub fn with_extras() -> Value {
        json!({
            "messages": [{"role": "user", "content": "hi", "name": "ada"}],
            "temperature": 0.2,
            "max_tokens": 16,
            "top_p": 0.9,
            "response_format": {"type": "json_object"}
        })
    }
}

/// Upstream chat-completion body whose first choice carries `content`
pub fn chat_completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-4",
        "choices": [{
            "index": 0,
            "finish_reason": "stop",
            "message": {"role": "assistant", "content": content}
        }],
        "usage": {"prompt_tokens": 12, "completion_tokens": 30, "total_tokens": 42}
    })
}

/// Upstream image-generation body listing the given URLs
pub fn image_generation(urls: &[&str]) -> Value {
    let data: Vec<Value> = urls
        .iter()
        .map(|url| json!({"url": url, "revised_prompt": "a revised prompt"}))
        .collect();
    json!({"created": 1_700_000_000, "data": data})
}
