//! REST-to-gRPC gateway entry point.
//!
//! ```text
//!     Client Request           ┌──────────────────────────────────────┐
//!     ─────────────────────────┼─▶ listener ──▶ cors ──▶ upstream ────┼──▶ Proxied
//!                              │   (axum)   admission    forward      │    Service
//!     Client Response          │                                      │
//!     ◀────────────────────────┼── response ◀── hyper client ◀────────┼────
//!                              └──────────────────────────────────────┘
//! ```
//!
//! Preflight and rejected cross-origin requests terminate at the cors
//! layer and never reach the upstream.

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rest_gateway::config::{self, Cli};
use rest_gateway::http::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rest_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("rest-gateway v0.1.0 starting");

    let cli = Cli::parse();
    let config = match config::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            // Startup configuration failures are fatal.
            tracing::error!(error = %e, "Configuration rejected");
            std::process::exit(1);
        }
    };

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.address,
        cors_allow_origin = %config.cors.allow_origin,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let server = HttpServer::new(&config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
