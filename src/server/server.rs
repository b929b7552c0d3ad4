//! HTTP server core implementation
//!
//! This module provides the HttpServer struct and its core methods.

use crate::config::{RelayConfig, ServerConfig};
use crate::core::providers::AzureOpenAIProvider;
use crate::core::traits::RelayProvider;
use crate::server::middleware::{RelayRootSpanBuilder, RequestIdMiddleware, cors_from_config};
use crate::server::routes;
use crate::server::state::AppState;
use crate::server::utils::{bind_error, shutdown_signal};
use crate::utils::error::{RelayError, Result};
use actix_web::{App, HttpServer as ActixHttpServer, web};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server backed by Azure OpenAI
    pub fn new(config: &RelayConfig) -> Result<Self> {
        info!("Creating HTTP server");
        let provider = AzureOpenAIProvider::new(config.azure().clone())?;
        Ok(Self::with_provider(config, Arc::new(provider)))
    }

    /// Create a new HTTP server that forwards to the given provider
    pub fn with_provider(config: &RelayConfig, provider: Arc<dyn RelayProvider>) -> Self {
        Self {
            config: config.server().clone(),
            state: AppState::new(config.clone(), provider),
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        let cors = cors_from_config(state.config().server());
        let json_config = web::JsonConfig::default()
            .error_handler(|err, _req| RelayError::bad_request(err.to_string()).into());

        App::new()
            .app_data(state)
            .app_data(json_config)
            .wrap(TracingLogger::<RelayRootSpanBuilder>::new())
            .wrap(RequestIdMiddleware)
            .wrap(cors)
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server on every configured address
    ///
    /// Returns after SIGINT/SIGTERM once in-flight requests have drained or
    /// the shutdown timeout has elapsed.
    pub async fn start(self) -> Result<()> {
        let addresses = self.config.addresses();
        let state = web::Data::new(self.state);

        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .disable_signals()
            .shutdown_timeout(self.config.shutdown_timeout);

        for addr in &addresses {
            server = server.bind(addr).map_err(|e| bind_error(e, addr))?;
            info!("HTTP server listening on {}", addr);
        }

        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(async move {
            shutdown_signal().await;
            handle.stop(true).await;
        });

        server.await?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
