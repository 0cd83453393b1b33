//! charmd - CHARM HTTP server
//!
//! Serves the character catalog, character creation, mock chat sessions
//! and generated mock data as a JSON API.

use std::path::PathBuf;

use anyhow::Context;
use charm_server::Server;
use charm_server::config::{self, Overrides};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// charmd CLI
#[derive(Parser)]
#[command(name = "charmd")]
#[command(about = "CHARM server - character catalog and mock chat API", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "CHARM_CONFIG")]
    config: Option<PathBuf>,

    /// Listen address
    #[arg(short, long, env = "CHARM_LISTEN_ADDR")]
    listen: Option<String>,

    /// Directory holding characters.json
    #[arg(long, env = "CHARM_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Keep created characters in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Disable CORS headers
    #[arg(long)]
    no_cors: bool,

    /// Log level
    #[arg(long, env = "CHARM_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable JSON logging
    #[arg(long, env = "CHARM_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = config::load(
        cli.config.as_deref(),
        Overrides {
            listen_addr: cli.listen,
            data_dir: cli.data_dir,
            log_level: cli.log_level,
            log_json: cli.json,
            no_cors: cli.no_cors,
        },
    )
    .context("Failed to load configuration")?;

    // RUST_LOG wins over the configured level
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log.level.clone().into());

    if config.log.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        listen = %config.server.listen_addr,
        ephemeral = cli.ephemeral,
        "Starting charmd"
    );

    let server = Server::new(config, cli.ephemeral)?;
    server.run().await?;
    Ok(())
}
