//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware wiring)
//!     → cors middleware (admission control)
//!     → upstream.rs (forward to the proxied service)
//!     → response streamed back to client
//! ```

pub mod server;
pub mod upstream;

pub use server::HttpServer;
