//! Upstream provider implementations

pub mod azure;

pub use crate::core::traits::RelayProvider;
pub use azure::AzureOpenAIProvider;
