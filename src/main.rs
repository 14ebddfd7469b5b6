//! Message Search Gateway
//!
//! A read-only HTTP search service over an upstream JSON message feed,
//! built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌───────────────────────────────────────────────┐
//!                       │                SEARCH GATEWAY                  │
//!                       │                                               │
//!   GET /search         │  ┌─────────┐    ┌──────────┐    ┌──────────┐ │
//!   ────────────────────┼─▶│  http   │───▶│  store   │───▶│ upstream │─┼──▶ Message
//!                       │  │ server  │    │ snapshot │    │ fetcher  │ │    Source
//!                       │  └─────────┘    │ + search │    └──────────┘ │
//!   200 / 422 / 502     │       │         └──────────┘                 │
//!   ◀───────────────────┼───────┘                                      │
//!                       │                                               │
//!                       │  ┌─────────────────────────────────────────┐ │
//!                       │  │          Cross-Cutting Concerns          │ │
//!                       │  │  ┌────────┐ ┌─────────────┐ ┌─────────┐ │ │
//!                       │  │  │ config │ │observability│ │lifecycle│ │ │
//!                       │  │  └────────┘ └─────────────┘ └─────────┘ │ │
//!                       │  └─────────────────────────────────────────┘ │
//!                       └───────────────────────────────────────────────┘
//! ```
//!
//! In startup mode the upstream is fetched exactly once, before the listener
//! opens; in per-request mode every search triggers a fresh fetch.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use search_gateway::config::{self, GatewayConfig};
use search_gateway::lifecycle::{self, Shutdown};
use search_gateway::observability;
use search_gateway::HttpServer;

#[derive(Parser, Debug)]
#[command(name = "search-gateway")]
#[command(about = "Read-only search API over an upstream message feed", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Resolve the config path: flag first, then environment.
    let config_path = args
        .config
        .or_else(|| std::env::var("GATEWAY_CONFIG").ok().map(PathBuf::from));

    let config = match &config_path {
        Some(path) => match config::load_config(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("failed to load {}: {}", path.display(), error);
                std::process::exit(1);
            }
        },
        None => GatewayConfig::default(),
    };

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "search_gateway={0},tower_http={0}",
                    config.observability.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "search-gateway starting"
    );

    match &config_path {
        Some(path) => tracing::info!(path = %path.display(), "Configuration loaded"),
        None => tracing::info!("No config file given, using defaults"),
    }
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_url = %config.upstream.url,
        mode = ?config.snapshot.mode,
        request_timeout_secs = config.listener.request_timeout_secs,
        "Configuration active"
    );

    // Initialize metrics server
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Build the upstream side; in startup mode this performs the one and
    // only fetch, and a failure is fatal. The fetcher owns the client
    // handle and must stay in scope until the server has stopped.
    let (state, fetcher) = match lifecycle::initialize(&config).await {
        Ok(parts) => parts,
        Err(error) => {
            tracing::error!(error = %error, "Startup failed, refusing to serve");
            std::process::exit(1);
        }
    };

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    // Wire OS signals to the shutdown broadcast
    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    tokio::spawn(async move {
        lifecycle::signals::wait_for_shutdown().await;
        shutdown.trigger();
    });

    // Create and run HTTP server
    let server = HttpServer::new(&config, state);
    server.run(listener, shutdown_rx).await?;

    drop(fetcher);
    tracing::info!("HTTP client closed");
    tracing::info!("Shutdown complete");
    Ok(())
}
