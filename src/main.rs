//! AuraPartner API entry point.
//!
//! Initializes tracing, loads configuration from the environment (with CLI
//! overrides), builds the Axum router with the middleware pipeline, and
//! starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aurapartner_api::config::{AppConfig, DEFAULT_LOG_FILTER};
use aurapartner_api::http::start_server;
use aurapartner_api::routes::create_router;
use aurapartner_api::state::AppState;

/// AuraPartner backend API server
#[derive(Parser, Debug)]
#[command(name = "aurapartner-api", version, about)]
struct Args {
    /// TCP port to bind (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,

    /// Allowed cross-origin value (overrides the CORS_ORIGIN environment variable)
    #[arg(long)]
    cors_origin: Option<String>,

    /// Log level filter (e.g., "aurapartner_api=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    // Load configuration; CLI flags take priority over environment values
    let mut config = AppConfig::from_env()?;
    if let Some(port) = args.port {
        config.http.port = port;
    }
    if let Some(origin) = args.cors_origin {
        config.cors.allowed_origin = origin;
    }
    config.validate()?;

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        port = config.http.port,
        cors_origin = %config.cors.allowed_origin,
        access_log = config.logging.access_log,
        "Loaded configuration"
    );

    // Create application state and router
    let state = AppState::new(config.clone());
    let app = create_router(state);

    // Start server; a bind failure propagates and terminates the process
    start_server(app, &config).await?;

    Ok(())
}
