//! Core functionality for the relay
//!
//! Request/response types, the upstream provider abstraction and the Azure
//! implementation, and extraction of the model's fenced JSON answer.

pub mod fenced_json;
pub mod providers;
pub mod traits;
pub mod types;
