//! Server response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub version: String,
    pub git_hash: String,
    pub timestamp: DateTime<Utc>,
    pub upstream: UpstreamInfo,
}

/// Upstream details reported by the health endpoint. Never includes the key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamInfo {
    pub provider: String,
    pub endpoint: String,
    pub deployment: String,
    pub image_deployment: String,
    pub model: String,
    pub chat_api_version: String,
    pub image_api_version: String,
    pub assistants_api_version: String,
}
