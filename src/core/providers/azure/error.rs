//! Azure OpenAI Error Handling
//!
//! Helpers that turn Azure failures into `RelayError`

use serde_json::Value;

use crate::utils::error::{Operation, RelayError};

/// Create an Azure configuration error
pub fn azure_config_error(msg: impl Into<String>) -> RelayError {
    RelayError::config(msg)
}

/// Create an Azure header validation error
pub fn azure_header_error(msg: impl Into<String>) -> RelayError {
    RelayError::config(format!("Invalid header: {}", msg.into()))
}

/// Create an Azure API error from a non-success response
///
/// The body is forwarded as JSON when it parses, otherwise as plain text.
pub fn azure_api_error(operation: Operation, status: u16, body: &str) -> RelayError {
    RelayError::upstream(operation, status, parse_error_body(body))
}

fn parse_error_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

/// Extract a short error message from an Azure error payload, for logging
pub fn extract_azure_error_message(response: &Value) -> String {
    if let Some(error) = response.get("error") {
        let message = error.get("message").and_then(|m| m.as_str());
        let code = error.get("code").and_then(|c| c.as_str());
        match (code, message) {
            (Some(code), Some(message)) => return format!("{}: {}", code, message),
            (None, Some(message)) => return message.to_string(),
            _ => {}
        }
    }

    match response {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
