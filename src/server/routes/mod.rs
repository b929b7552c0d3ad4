//! HTTP route modules
//!
//! One handler per route. Both listeners serve this same table.

pub mod dalle;
pub mod generate;
pub mod health;

use actix_web::web;

/// Configure every relay route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(generate::configure_routes)
        .configure(dalle::configure_routes);
}
