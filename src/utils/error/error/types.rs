//! Error types for the relay

use serde_json::Value;
use thiserror::Error;

/// Result type alias for the relay
pub type Result<T> = std::result::Result<T, RelayError>;

/// The upstream capability a failure belongs to.
///
/// Upstream-category failures are reported to the client with a message
/// naming the operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Chat completion (`POST /api/generate`)
    Chat,
    /// Image generation (`POST /api/dalle/image`)
    Image,
}

impl Operation {
    /// Client-facing message for an upstream failure of this operation
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Chat => "Failed to generate response",
            Operation::Image => "Failed to generate image",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Chat => write!(f, "chat"),
            Operation::Image => write!(f, "image"),
        }
    }
}

/// Main error type for the relay
#[derive(Error, Debug)]
pub enum RelayError {
    /// Configuration errors, raised at startup only
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors, e.g. failing to bind a listener
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The client sent a body the relay could not decode
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The upstream answered with a non-success status
    #[error("Upstream {operation} request failed with status {status}")]
    Upstream {
        operation: Operation,
        status: u16,
        details: Value,
    },

    /// The upstream could not be reached or its body could not be read
    #[error("Upstream {operation} transport error: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered successfully but without the expected fields
    #[error("Unexpected upstream {operation} response: {message}")]
    UnexpectedResponse {
        operation: Operation,
        message: String,
    },

    /// The model's fenced answer is not valid JSON
    #[error("Failed to parse model response as JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Image generation succeeded but returned no images
    #[error("No images generated")]
    NoImages,
}
