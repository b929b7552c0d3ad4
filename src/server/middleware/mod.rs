//! HTTP middleware implementations
//!
//! - Request ID propagation
//! - Root span carrying the propagated request ID
//! - CORS policy built from the server configuration

mod cors;
mod request_id;
mod root_span;

pub use cors::cors_from_config;
pub use request_id::{REQUEST_ID_HEADER, RequestIdMiddleware, RequestIdMiddlewareService};
pub use root_span::{RelayRootSpanBuilder, span_request_id};
