//! Utility modules for the relay
//!
//! - **error**: the relay error type and its HTTP mapping
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod logging;
