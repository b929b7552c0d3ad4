//! Configuration data models

pub mod logging;
pub mod server;

pub use logging::*;
pub use server::*;

/// Default listen host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default port of the chat listener
pub fn default_chat_port() -> u16 {
    3001
}

/// Default port of the image listener
pub fn default_image_port() -> u16 {
    3002
}

/// Default graceful shutdown timeout in seconds
pub fn default_shutdown_timeout() -> u64 {
    30
}

/// Default tracing filter
pub fn default_log_filter() -> String {
    "info".to_string()
}
