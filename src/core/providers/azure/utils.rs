//! Azure OpenAI Utilities
//!
//! Utility functions for Azure OpenAI Service

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use super::error::azure_header_error;
use crate::utils::error::Result;

/// Azure endpoint types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AzureEndpointType {
    ChatCompletions,
    Images,
}

impl AzureEndpointType {
    /// Path segment under `/openai/deployments/{deployment}/`
    pub fn path(self) -> &'static str {
        match self {
            AzureEndpointType::ChatCompletions => "chat/completions",
            AzureEndpointType::Images => "images/generations",
        }
    }
}

/// Azure OpenAI utilities
pub struct AzureUtils;

impl AzureUtils {
    /// Build Azure OpenAI URL
    pub fn build_azure_url(
        azure_endpoint: &str,
        deployment_name: &str,
        api_version: &str,
        endpoint_type: AzureEndpointType,
    ) -> String {
        let base = azure_endpoint.trim_end_matches('/');

        format!(
            "{}/openai/deployments/{}/{}?api-version={}",
            base,
            deployment_name,
            endpoint_type.path(),
            api_version
        )
    }

    /// Create Azure request headers
    pub fn create_azure_headers(api_key: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        // Azure uses api-key header, not Authorization
        let mut key = HeaderValue::from_str(api_key)
            .map_err(|e| azure_header_error(format!("Invalid API key: {}", e)))?;
        key.set_sensitive(true);
        headers.insert(HeaderName::from_static("api-key"), key);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(headers)
    }
}
