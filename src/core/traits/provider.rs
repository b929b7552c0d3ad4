//! Upstream provider trait
//!
//! The HTTP layer talks to the upstream only through [`RelayProvider`], so the
//! route handlers stay independent of the Azure wire format.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

use crate::core::types::ChatRequest;
use crate::utils::error::Result;

/// A language-model and image-generation backend the relay forwards to
///
/// Implementations must not keep per-request state: one instance serves every
/// concurrent request.
#[async_trait]
pub trait RelayProvider: Send + Sync + Debug + 'static {
    /// Provider name, used in logs and the health report
    fn name(&self) -> &'static str;

    /// Run a chat completion and return the JSON object the model embedded
    /// in its reply
    async fn generate_json(&self, request: &ChatRequest) -> Result<Value>;

    /// Generate a single image and return its URL
    async fn generate_image(&self, prompt: &str) -> Result<String>;
}
