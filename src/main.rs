mod classify;
mod config;
mod geo;
mod models;
mod record;
mod web;

use std::sync::Arc;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::settings::{LoggingConfig, Settings};
use crate::geo::client::GeoClient;
use crate::record::sink::VisitLog;
use crate::web::handler::AppState;
use crate::web::server::VisitServer;

/// Parse the `--config` CLI flag. Defaults to `/opt/vigia/config/vigia.toml`.
fn parse_config_path() -> String {
    let args: Vec<String> = std::env::args().collect();
    let mut config_path = String::from("/opt/vigia/config/vigia.toml");

    let mut i = 1;
    while i < args.len() {
        if args[i] == "--config" {
            if let Some(path) = args.get(i + 1) {
                config_path = path.clone();
            }
            i += 2;
        } else {
            i += 1;
        }
    }

    config_path
}

/// Initialise the `tracing` subscriber with both stdout and file output.
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    if let Some(parent) = std::path::Path::new(&logging.file).parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&logging.file)
        .with_context(|| format!("Failed to open log file: {}", logging.file))?;

    let file_layer = fmt::layer()
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ---------------------------------------------------------------
    // 1. Configuration
    // ---------------------------------------------------------------
    let config_path = parse_config_path();
    let settings = Settings::load(&config_path)?;
    let settings = Arc::new(settings);

    // ---------------------------------------------------------------
    // 2. Logging
    // ---------------------------------------------------------------
    init_tracing(&settings.logging)?;

    info!("Starting Vigía visit logger");
    info!("Config loaded from {}", config_path);

    // ---------------------------------------------------------------
    // 3. Pipeline components
    // ---------------------------------------------------------------
    let server_tz: chrono_tz::Tz = settings
        .server
        .timezone
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server timezone {:?}: {}", settings.server.timezone, e))?;

    let visit_log = Arc::new(
        VisitLog::open(&settings.logging.visit_log)
            .with_context(|| format!("Failed to open visit log: {}", settings.logging.visit_log))?,
    );
    info!("Visit log open at {}", settings.logging.visit_log);

    let geo = Arc::new(GeoClient::new(&settings.geo));

    // ---------------------------------------------------------------
    // 4. HTTP server
    // ---------------------------------------------------------------
    let state = AppState {
        settings: settings.clone(),
        geo,
        visit_log,
        server_tz,
    };

    let server = VisitServer::new(state, settings.server.bind.clone());

    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.run().await {
            error!("Visit server error: {}", e);
        }
    });

    info!("Vigía is running. Press Ctrl+C to shut down.");

    // ---------------------------------------------------------------
    // 5. Wait for shutdown signal
    // ---------------------------------------------------------------
    tokio::signal::ctrl_c().await?;
    info!("Shutting down Vigía...");

    server_handle.abort();

    info!("Vigía shut down gracefully");
    Ok(())
}
