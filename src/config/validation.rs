//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address parses as a socket address
//! - Check the upstream address is present and parses as an authority
//! - Check configured origins are plausible header values
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig → Result<(), Vec<ValidationError>>
//! - Runs once, after all configuration sources are merged

use std::net::SocketAddr;
use std::str::FromStr;

use axum::http::uri::Authority;

use crate::config::schema::GatewayConfig;

/// A single semantic configuration problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid bind address '{0}'")]
    InvalidBindAddress(String),

    #[error("upstream address is required")]
    MissingUpstreamAddress,

    #[error("invalid upstream address '{0}'")]
    InvalidUpstreamAddress(String),

    #[error("invalid CORS origin '{0}'")]
    InvalidOrigin(String),
}

/// Validate the merged configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.upstream.address.is_empty() {
        errors.push(ValidationError::MissingUpstreamAddress);
    } else if Authority::from_str(&config.upstream.address).is_err() {
        errors.push(ValidationError::InvalidUpstreamAddress(
            config.upstream.address.clone(),
        ));
    }

    // Origins are matched byte-for-byte against the Origin header; embedded
    // whitespace can never match and signals a mistyped list.
    for origin in config.cors.allow_origin.split(',').filter(|s| !s.is_empty()) {
        if origin.chars().any(char::is_whitespace) {
            errors.push(ValidationError::InvalidOrigin(origin.to_string()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> GatewayConfig {
        let mut config = GatewayConfig::default();
        config.upstream.address = "127.0.0.1:50051".into();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_missing_upstream() {
        let config = GatewayConfig::default();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::MissingUpstreamAddress));
    }

    #[test]
    fn test_invalid_bind_address() {
        let mut config = valid_config();
        config.listener.bind_address = "not-an-address".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidBindAddress("not-an-address".into())]
        );
    }

    #[test]
    fn test_invalid_upstream_authority() {
        let mut config = valid_config();
        config.upstream.address = "http://has a scheme and spaces".into();
        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors.as_slice(),
            [ValidationError::InvalidUpstreamAddress(_)]
        ));
    }

    #[test]
    fn test_origin_with_whitespace_rejected() {
        let mut config = valid_config();
        config.cors.allow_origin = "https://a.example, https://b.example".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidOrigin(" https://b.example".into())]
        );
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = GatewayConfig::default();
        config.listener.bind_address = "nope".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
