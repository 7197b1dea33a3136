//! Seneca Email Service
//!
//! A small HTTP service that validates and formats Seneca College email
//! addresses, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌───────────────────────────────────────────────┐
//!                      │                   SERVICE                     │
//!                      │                                               │
//!     Client Request   │  ┌─────────┐       ┌──────────────┐          │
//!     ─────────────────┼─▶│  http   │──────▶│    email     │          │
//!                      │  │ server  │       │ validator /  │          │
//!                      │  └────┬────┘       │  formatter   │          │
//!                      │       │            └──────┬───────┘          │
//!     Client Response  │       ▼                   │                  │
//!     ◀────────────────┼── JSON / text ◀───────────┘                  │
//!                      │                                               │
//!                      │  ┌─────────────────────────────────────────┐ │
//!                      │  │         Cross-Cutting Concerns          │ │
//!                      │  │  ┌────────┐ ┌─────────────┐ ┌─────────┐ │ │
//!                      │  │  │ config │ │observability│ │lifecycle│ │ │
//!                      │  │  └────────┘ └─────────────┘ └─────────┘ │ │
//!                      │  └─────────────────────────────────────────┘ │
//!                      └───────────────────────────────────────────────┘
//! ```
//!
//! The email core is a pair of pure functions; everything else is routing,
//! middleware, and lifecycle plumbing around them.

use tokio::net::TcpListener;

use seneca_mail::config;
use seneca_mail::http::HttpServer;
use seneca_mail::lifecycle::{signals, Shutdown};
use seneca_mail::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    logging::init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "seneca-mail starting");

    // Load configuration (environment override for the port only)
    let config = config::load_from_env()?;

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics exporter
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Translate SIGINT/SIGTERM into a graceful-shutdown trigger
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::trigger_on_signal(shutdown));

    // Create and run HTTP server
    let server = HttpServer::new(config);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
