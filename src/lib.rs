//! # azure-relay
//!
//! A stateless HTTP relay between a browser application and an Azure OpenAI
//! deployment.
//!
//! - `POST /api/generate` forwards a chat conversation and returns the JSON
//!   object the model wrapped in a Markdown code fence.
//! - `POST /api/dalle/image` generates one image and returns `{imagePath}`.
//! - `GET /health` reports build and upstream metadata.
//!
//! ```rust,no_run
//! use azure_relay::{RelayConfig, run_server};
//!
//! #[actix_web::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RelayConfig::load(None)?;
//!     run_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

pub use config::RelayConfig;
pub use core::fenced_json::{parse_fenced_json, strip_code_fences};
pub use core::providers::{AzureOpenAIProvider, RelayProvider};
pub use core::types::{ChatMessage, ChatRequest, ImageRequest, ImageResponse};
pub use server::{AppState, HttpServer, ServerBuilder, run_server};
pub use utils::error::{RelayError, Result};
