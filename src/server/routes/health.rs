//! Health check endpoint

use crate::server::state::AppState;
use crate::server::types::{HealthReport, UpstreamInfo};
use actix_web::{HttpResponse, Result as ActixResult, web};
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check));
}

/// Report liveness, build metadata and the upstream the relay forwards to
///
/// The check does not call the upstream.
pub async fn health_check(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let azure = state.config().azure();
    let report = HealthReport {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        git_hash: env!("GIT_HASH").to_string(),
        timestamp: chrono::Utc::now(),
        upstream: UpstreamInfo {
            provider: state.provider.name().to_string(),
            endpoint: azure.azure_endpoint.clone(),
            deployment: azure.deployment_name.clone(),
            image_deployment: azure.image_deployment_name.clone(),
            model: azure.model.clone(),
            chat_api_version: azure.chat_api_version.clone(),
            image_api_version: azure.image_api_version.clone(),
            assistants_api_version: azure.assistants_api_version.clone(),
        },
    };

    Ok(HttpResponse::Ok().json(report))
}
