//! Image relay endpoint

use crate::core::types::{ImageRequest, ImageResponse};
use crate::server::state::AppState;
use crate::utils::error::RelayError;
use actix_web::{HttpResponse, web};
use tracing::info;

/// Configure image routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/dalle/image", web::post().to(generate_image));
}

/// Generate one image for the prompt and return its URL as `imagePath`
pub async fn generate_image(
    state: web::Data<AppState>,
    request: web::Json<ImageRequest>,
) -> Result<HttpResponse, RelayError> {
    let ImageRequest { prompt } = request.into_inner();
    info!(
        provider = state.provider.name(),
        prompt_chars = prompt.chars().count(),
        "Image relay request"
    );

    let image_path = state.provider.generate_image(&prompt).await?;

    Ok(HttpResponse::Ok().json(ImageResponse { image_path }))
}
