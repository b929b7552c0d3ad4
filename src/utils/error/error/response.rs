//! HTTP response handling for errors

use super::types::RelayError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::Value;
use tracing::{error, warn};

/// Standard error response format
///
/// `details` carries whatever diagnostic detail was available: the upstream
/// error payload, the transport error message or the JSON parser's message.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<&RelayError> for ErrorResponse {
    fn from(err: &RelayError) -> Self {
        let (message, details) = match err {
            RelayError::Config(_) => (err.to_string(), None),
            RelayError::Io(_) => ("Internal server error".to_string(), None),
            RelayError::BadRequest(m) => {
                ("Invalid request body".to_string(), Some(Value::String(m.clone())))
            }
            RelayError::Upstream {
                operation, details, ..
            } => (operation.failure_message().to_string(), Some(details.clone())),
            RelayError::Transport { operation, source } => (
                operation.failure_message().to_string(),
                Some(Value::String(source.to_string())),
            ),
            RelayError::UnexpectedResponse { operation, message } => (
                operation.failure_message().to_string(),
                Some(Value::String(message.clone())),
            ),
            RelayError::Parse(e) => (
                "Failed to parse model response as JSON".to_string(),
                Some(Value::String(e.to_string())),
            ),
            RelayError::NoImages => ("No images generated".to_string(), None),
        };

        Self {
            error: message,
            kind: err.kind().to_string(),
            details,
        }
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            RelayError::BadRequest(_) => warn!(error = %self, "rejected request"),
            _ => error!(error = %self, kind = self.kind(), "relay request failed"),
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse::from(self))
    }
}
