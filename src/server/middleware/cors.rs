//! CORS policy

use crate::config::ServerConfig;
use actix_cors::Cors;
use tracing::warn;

/// Build the CORS middleware for the relay
///
/// The browser app calls the relay cross-origin, so any origin is allowed
/// unless the configuration lists specific ones.
pub fn cors_from_config(config: &ServerConfig) -> Cors {
    let cors = if config.allows_all_origins() {
        Cors::default().allow_any_origin()
    } else {
        config
            .cors_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    if config.allows_all_origins() && !config.cors_origins.is_empty() {
        warn!("CORS origin list contains '*'; every origin is allowed");
    }

    cors.allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_any_header()
        .expose_headers(vec![super::REQUEST_ID_HEADER])
        .max_age(3600)
}
