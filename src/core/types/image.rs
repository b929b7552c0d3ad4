//! Image generation request types

use serde::{Deserialize, Serialize};

/// Image request as sent by the client application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageRequest {
    /// Image description prompt
    pub prompt: String,
}

/// Body forwarded to the upstream image endpoint
///
/// Everything except the prompt is fixed: one vivid, standard-quality,
/// 1024x1024 image.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ImageGenerationParams {
    pub prompt: String,
    pub size: &'static str,
    pub n: u32,
    pub quality: &'static str,
    pub style: &'static str,
}

impl ImageGenerationParams {
    pub const SIZE: &'static str = "1024x1024";
    pub const COUNT: u32 = 1;
    pub const QUALITY: &'static str = "standard";
    pub const STYLE: &'static str = "vivid";

    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            size: Self::SIZE,
            n: Self::COUNT,
            quality: Self::QUALITY,
            style: Self::STYLE,
        }
    }
}

/// Image response returned to the client application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageResponse {
    /// URL of the generated image, hosted by the provider
    #[serde(rename = "imagePath")]
    pub image_path: String,
}
