use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use users_service::prelude::*;

/// users-service - In-memory users CRUD API
#[derive(Parser)]
#[command(name = "users-service")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the standard locations
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Port to listen on (overrides configuration)
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => Config::load().context("failed to load configuration")?,
    };

    if let Some(port) = cli.port {
        config.service.port = port;
    }

    init_tracing(&config)?;

    let state = AppState::in_memory(config.clone());
    Server::new(config).serve(router(state)).await?;

    Ok(())
}
