//! Azure OpenAI Client
//!
//! HTTP client wrapper for Azure OpenAI Service

use reqwest::header::HeaderMap;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use super::config::AzureConfig;
use super::error::{azure_api_error, azure_config_error, extract_azure_error_message};
use super::utils::{AzureEndpointType, AzureUtils};
use crate::utils::error::{Operation, RelayError, Result};

/// Azure OpenAI client
///
/// Cheap to clone: the configuration and the connection pool are shared.
#[derive(Debug, Clone)]
pub struct AzureClient {
    config: Arc<AzureConfig>,
    http_client: reqwest::Client,
}

impl AzureClient {
    /// Create new Azure client
    pub fn new(config: AzureConfig) -> Result<Self> {
        config.validate().map_err(azure_config_error)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| azure_config_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config: Arc::new(config),
            http_client,
        })
    }

    /// Get configuration
    pub fn get_config(&self) -> &AzureConfig {
        &self.config
    }

    /// Build request URL for a deployment
    pub fn build_url(&self, endpoint_type: AzureEndpointType) -> String {
        let (deployment, api_version) = match endpoint_type {
            AzureEndpointType::ChatCompletions => {
                (&self.config.deployment_name, &self.config.chat_api_version)
            }
            AzureEndpointType::Images => (
                &self.config.image_deployment_name,
                &self.config.image_api_version,
            ),
        };

        AzureUtils::build_azure_url(
            &self.config.azure_endpoint,
            deployment,
            api_version,
            endpoint_type,
        )
    }

    /// POST a JSON body to an Azure endpoint and return the decoded JSON reply
    ///
    /// Non-success statuses become `RelayError::Upstream` carrying the
    /// upstream body. Nothing is retried.
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        operation: Operation,
        endpoint_type: AzureEndpointType,
        body: &T,
    ) -> Result<Value> {
        let url = self.build_url(endpoint_type);
        let headers = AzureUtils::create_azure_headers(&self.config.api_key)?;

        debug!(%operation, endpoint = endpoint_type.path(), "forwarding request to Azure");

        let response = self
            .http_client
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await
            .map_err(|e| RelayError::transport(operation, e))?;

        let status = response.status();
        AzureRateLimitInfo::from_headers(response.headers()).log(operation);

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let err = azure_api_error(operation, status.as_u16(), &error_body);
            if let RelayError::Upstream { details, .. } = &err {
                warn!(
                    %operation,
                    status = status.as_u16(),
                    message = %extract_azure_error_message(details),
                    "Azure returned an error"
                );
            }
            return Err(err);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| RelayError::transport(operation, e))
    }
}

/// Azure rate limiting information
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AzureRateLimitInfo {
    pub requests_remaining: Option<u32>,
    pub tokens_remaining: Option<u32>,
    pub request_id: Option<String>,
}

impl AzureRateLimitInfo {
    /// Extract rate limit info from headers
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            requests_remaining: headers
                .get("x-ratelimit-remaining-requests")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok()),
            tokens_remaining: headers
                .get("x-ratelimit-remaining-tokens")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok()),
            request_id: headers
                .get("x-request-id")
                .or_else(|| headers.get("apim-request-id"))
                .and_then(|v| v.to_str().ok())
                .map(|s| s.to_string()),
        }
    }

    fn log(&self, operation: Operation) {
        if *self == Self::default() {
            return;
        }
        debug!(
            %operation,
            requests_remaining = ?self.requests_remaining,
            tokens_remaining = ?self.tokens_remaining,
            upstream_request_id = ?self.request_id,
            "Azure rate limit status"
        );
    }
}
