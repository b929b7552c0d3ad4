//! Helper functions for creating specific error types

use super::types::{Operation, RelayError};
use serde_json::Value;

impl RelayError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn upstream(operation: Operation, status: u16, details: Value) -> Self {
        Self::Upstream {
            operation,
            status,
            details,
        }
    }

    pub fn transport(operation: Operation, source: reqwest::Error) -> Self {
        Self::Transport { operation, source }
    }

    pub fn unexpected_response<S: Into<String>>(operation: Operation, message: S) -> Self {
        Self::UnexpectedResponse {
            operation,
            message: message.into(),
        }
    }

    /// Machine-readable category reported as the `type` field of the body
    pub fn kind(&self) -> &'static str {
        match self {
            RelayError::Config(_) => "config_error",
            RelayError::Io(_) => "internal_error",
            RelayError::BadRequest(_) => "invalid_request",
            RelayError::Upstream { .. }
            | RelayError::Transport { .. }
            | RelayError::UnexpectedResponse { .. } => "upstream_error",
            RelayError::Parse(_) => "parse_error",
            RelayError::NoImages => "no_images",
        }
    }

    /// Whether the failure came from the upstream provider rather than from
    /// the relay or the client
    pub fn is_upstream(&self) -> bool {
        self.kind() == "upstream_error"
    }
}
