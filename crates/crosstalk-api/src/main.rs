//! Crosstalk relay entry point.
//!
//! Binary name: `crosstalk`
//!
//! Parses CLI arguments, initializes tracing, loads the provider
//! configuration, wires the application state, and serves the HTTP API
//! until Ctrl+C.

mod http;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crosstalk_infra::config::{load_config, resolve_providers};
use state::AppState;

#[derive(Debug, Parser)]
#[command(name = "crosstalk", version, about = "Provider-failover chat relay")]
struct Cli {
    /// Path to the relay configuration file.
    #[arg(long, default_value = "crosstalk.toml")]
    config: PathBuf,

    /// Listen address override (defaults to the config file's bind_addr).
    #[arg(long)]
    bind: Option<String>,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,crosstalk=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    let config = load_config(&cli.config).await?;
    let bind_addr = cli.bind.unwrap_or_else(|| config.bind_addr.clone());

    let state = AppState::new(resolve_providers(config.providers));
    let app = http::router::build_router(state)
        .into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(addr = %bind_addr, "relay listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("relay stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
}
