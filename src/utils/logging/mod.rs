//! Tracing subscriber setup

use crate::config::LoggingConfig;
use crate::utils::error::{RelayError, Result};
use tracing_subscriber::EnvFilter;

/// Resolve the active filter: `RUST_LOG` first, then the configured filter,
/// then `info`
///
/// The returned warning is printed once the subscriber is installed.
pub fn build_env_filter(
    env_value: Option<&str>,
    configured: &str,
) -> (EnvFilter, Option<String>) {
    if let Some(filter) = env_value.and_then(|v| EnvFilter::try_new(v).ok()) {
        return (filter, None);
    }

    match EnvFilter::try_new(configured) {
        Ok(filter) => (filter, None),
        Err(e) => (
            EnvFilter::new("info"),
            Some(format!(
                "log filter '{}' is not a valid tracing filter ({}); falling back to 'info'",
                configured, e
            )),
        ),
    }
}

/// Install the global tracing subscriber
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let env_value = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (env_filter, warning) = build_env_filter(env_value.as_deref(), &config.filter);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false);

    let installed = if config.json {
        subscriber.json().try_init()
    } else {
        subscriber.try_init()
    };
    installed.map_err(|e| RelayError::config(format!("failed to install tracing subscriber: {}", e)))?;

    if let Some(warning) = warning {
        tracing::warn!("{}", warning);
    }

    Ok(())
}
