//! Command-line and environment configuration sources.
//!
//! Every flag falls back to an environment variable, so the process can be
//! driven entirely from the environment in container deployments.

use clap::Parser;
use std::path::PathBuf;

/// Command-line options for the gateway.
#[derive(Debug, Parser)]
#[command(name = "rest-gateway", about = "HTTP gateway with CORS admission control")]
pub struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, env = "GATEWAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Upstream service address (host:port) requests are forwarded to.
    #[arg(long, env = "GATEWAY_UPSTREAM_ADDR")]
    pub upstream_addr: Option<String>,

    /// Comma-separated list of allowed CORS origins.
    #[arg(long, env = "GATEWAY_CORS_ALLOW_ORIGIN")]
    pub cors_allow_origin: Option<String>,

    /// Address the HTTP listener binds to.
    #[arg(long, env = "GATEWAY_BIND_ADDRESS")]
    pub bind_address: Option<String>,
}
