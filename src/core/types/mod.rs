//! Core type definition module
//!
//! Request and response payloads exchanged with the client application.
//! Every value here lives for a single request.

pub mod chat;
pub mod image;

pub use chat::{ChatMessage, ChatRequest};
pub use image::{ImageGenerationParams, ImageRequest, ImageResponse};
