//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router with the catch-all forwarding handler
//! - Wire up middleware (tracing, request ID, CORS admission)
//! - Bind server to listener and serve with graceful shutdown

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    http::uri::{Authority, InvalidUri},
    middleware,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::cors::{cors_middleware, CorsPolicy};
use crate::http::upstream::{self, UpstreamState};

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server from a validated configuration.
    pub fn new(config: &GatewayConfig) -> Result<Self, InvalidUri> {
        let authority = Authority::from_str(&config.upstream.address)?;
        let policy = Arc::new(CorsPolicy::from_allow_origin(&config.cors.allow_origin));

        Ok(Self {
            router: Self::build_router(policy, UpstreamState::new(authority)),
        })
    }

    /// Build the axum router with all middleware layers.
    fn build_router(policy: Arc<CorsPolicy>, state: UpstreamState) -> Router {
        // Layers run outermost-last: trace → request id → cors → forward,
        // so even preflight/reject responses carry a request ID.
        Router::new()
            .route("/{*path}", any(upstream::forward))
            .route("/", any(upstream::forward))
            .with_state(state)
            .layer(middleware::from_fn_with_state(policy, cors_middleware))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            // Returning would shut the server down; stay pending instead.
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
