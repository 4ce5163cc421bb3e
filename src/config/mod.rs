//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → cli.rs overrides (environment, then flags)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → shared by value/Arc with the server
//! ```
//!
//! # Design Decisions
//! - Config is immutable once resolved; there is no reload
//! - All fields have defaults except the upstream address, which is required
//! - Validation separates syntactic (serde) from semantic checks
//! - Flags beat environment beats file, so deployments can pin a base file
//!   and override per instance

pub mod cli;
pub mod loader;
pub mod schema;
pub mod validation;

pub use cli::Cli;
pub use loader::ConfigError;
pub use schema::{CorsConfig, GatewayConfig, ListenerConfig, UpstreamConfig};

use crate::config::validation::validate_config;

/// Resolve the effective configuration from file, environment, and flags.
pub fn resolve(cli: &Cli) -> Result<GatewayConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => loader::load_file(path)?,
        None => GatewayConfig::default(),
    };

    if let Some(address) = &cli.bind_address {
        config.listener.bind_address = address.clone();
    }
    if let Some(address) = &cli.upstream_addr {
        config.upstream.address = address.clone();
    }
    if let Some(origins) = &cli.cors_allow_origin {
        config.cors.allow_origin = origins.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli {
            config: None,
            upstream_addr: Some("127.0.0.1:50051".into()),
            cors_allow_origin: Some("https://a.example".into()),
            bind_address: Some("127.0.0.1:9000".into()),
        };

        let config = resolve(&cli).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
        assert_eq!(config.upstream.address, "127.0.0.1:50051");
        assert_eq!(config.cors.allow_origin, "https://a.example");
    }

    #[test]
    fn test_missing_upstream_is_fatal() {
        let cli = Cli {
            config: None,
            upstream_addr: None,
            cors_allow_origin: None,
            bind_address: None,
        };

        assert!(matches!(
            resolve(&cli),
            Err(ConfigError::Validation(_))
        ));
    }
}
