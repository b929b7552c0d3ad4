//! azure-relay - HTTP relay in front of an Azure OpenAI deployment

use anyhow::Context;
use azure_relay::config::RelayConfig;
use azure_relay::server;
use azure_relay::utils::logging::init_tracing;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "relay", version, about = "Relay chat and image requests to Azure OpenAI")]
struct Cli {
    /// Dotenv file read before the process environment; ignored when missing
    #[arg(long, env = "RELAY_ENV_FILE", default_value = ".env")]
    env_file: PathBuf,

    /// Emit logs as newline-delimited JSON
    #[arg(long)]
    log_json: bool,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = RelayConfig::load(Some(cli.env_file.as_path()))
        .context("failed to load relay configuration")?;
    if cli.log_json {
        config.logging.json = true;
    }

    init_tracing(&config.logging)?;

    info!(version = env!("CARGO_PKG_VERSION"), "azure-relay starting");
    match config.dotenv_vars {
        Some(count) => info!(path = %cli.env_file.display(), count, "Loaded dotenv file"),
        None => info!(
            path = %cli.env_file.display(),
            "No dotenv file found, using the process environment only"
        ),
    }
    info!(
        upstream = %serde_json::to_string(config.azure()).unwrap_or_default(),
        addresses = ?config.server().addresses(),
        "Configuration loaded"
    );

    server::run_server(config).await?;
    Ok(())
}
