//! Listener helpers: shutdown signal and bind error reporting

use crate::utils::error::RelayError;
use std::io::{Error, ErrorKind};
use tracing::{info, warn};

/// Resolves on SIGINT (Ctrl+C) or, on Unix, SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C signal, shutting down gracefully"),
            Err(e) => {
                warn!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                info!("Received terminate signal, shutting down gracefully");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// Attach the address and a hint to a listener bind failure
pub(crate) fn bind_error(error: Error, bind_addr: &str) -> RelayError {
    let hint = match error.kind() {
        ErrorKind::AddrInUse => " (is another relay already running? set CHAT_PORT/DALLE_PORT)",
        ErrorKind::PermissionDenied => " (ports below 1024 need elevated privileges)",
        _ => "",
    };

    RelayError::Io(Error::new(
        error.kind(),
        format!("failed to bind {}: {}{}", bind_addr, error, hint),
    ))
}
