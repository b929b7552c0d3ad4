//! Chat relay endpoint

use crate::core::types::ChatRequest;
use crate::server::state::AppState;
use crate::utils::error::RelayError;
use actix_web::{HttpResponse, web};
use tracing::{debug, info};

/// Configure chat routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/generate", web::post().to(generate));
}

/// Forward the conversation upstream and return the JSON object the model
/// embedded in its reply, unchanged
pub async fn generate(
    state: web::Data<AppState>,
    request: web::Json<ChatRequest>,
) -> Result<HttpResponse, RelayError> {
    let request = request.into_inner();
    info!(
        provider = state.provider.name(),
        messages = request.messages.len(),
        "Chat relay request"
    );

    let value = state.provider.generate_json(&request).await?;
    debug!("Chat relay request succeeded");

    Ok(HttpResponse::Ok().json(value))
}
