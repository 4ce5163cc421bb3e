//! REST-to-gRPC gateway with CORS admission control.
//!
//! A small HTTP front that forwards REST-style requests to a single
//! upstream gateway endpoint, applying a CORS allow-list before the
//! forward. Protocol translation itself (gRPC transcoding) lives in the
//! upstream collaborator; this process only admits, decorates, and
//! forwards.

pub mod config;
pub mod cors;
pub mod http;

pub use config::GatewayConfig;
pub use cors::CorsPolicy;
pub use http::HttpServer;
