//! trackstats-api - read-only analytics API over a track statistics CSV
//!
//! Loads the CSV once, then serves JSON summaries and the static front end.
//! A failed load does not stop startup: the data endpoints report the
//! degraded state instead.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use trackstats_api::dataset::Dataset;
use trackstats_api::{build_router, AppState};
use trackstats_common::config::{
    load_toml_config, resolve_config_path, CliOverrides, ServiceConfig, TomlConfig,
};

/// Command-line arguments for trackstats-api
#[derive(Parser, Debug)]
#[command(name = "trackstats-api")]
#[command(about = "Read-only analytics API over music track statistics")]
#[command(version)]
struct Args {
    /// TOML config file (default: <config_dir>/trackstats/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Source CSV (Latin-1 encoded)
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Directory holding index.html and front-end assets
    #[arg(short, long)]
    static_dir: Option<PathBuf>,

    /// Host to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = resolve_config_path(args.config.as_deref());
    let toml_config = match &config_path {
        Some(path) => load_toml_config(path).context("Failed to load config file")?,
        None => TomlConfig::default(),
    };

    let cli = CliOverrides {
        data_file: args.data_file,
        static_dir: args.static_dir,
        host: args.host,
        port: args.port,
    };
    let config = ServiceConfig::resolve(&cli, &toml_config).context("Invalid configuration")?;

    // Initialize tracing (RUST_LOG wins over the configured level)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},tower_http=debug", config.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting trackstats-api v{}", env!("CARGO_PKG_VERSION"));

    if let Some(path) = &config_path {
        if path.exists() {
            info!("Config file: {}", path.display());
        } else {
            info!("Config file {} not found (using defaults)", path.display());
        }
    }

    info!("Data file: {}", config.data_file.display());
    info!("Static directory: {}", config.static_dir.display());

    // One-time load; the table is immutable from here on
    let dataset = Dataset::load(&config.data_file);
    log_load_outcome(&dataset);

    let state = AppState::new(dataset, config.static_dir.clone());
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("trackstats-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

fn log_load_outcome(dataset: &Dataset) {
    match dataset.table() {
        Some(table) => {
            info!(
                "Server ready: {} records with {} columns",
                table.row_count(),
                table.column_count()
            );
            info!("Available columns: {:?}", table.column_names());
        }
        None => {
            warn!("Failed to load data! Please check:");
            warn!("1. Data file exists at {}", dataset.data_file().display());
            warn!(
                "2. File has the expected name: '{}'",
                dataset
                    .data_file()
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            );
            warn!("3. File is readable");
            warn!("Data endpoints will answer with errors until the service is restarted");
        }
    }
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
