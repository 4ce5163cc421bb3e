//! CORS admission control subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → middleware.rs (read Origin header and method)
//!     → policy.rs (pure decision: forward / decorate / preflight / reject)
//!     → forward to inner handler, or terminate with 204
//! ```
//!
//! # Design Decisions
//! - Policy is immutable after construction (thread-safe without locks)
//! - The decision itself is pure and unit-tested in isolation; the
//!   middleware only maps decisions onto responses
//! - Preflight and reject outcomes never reach the inner handler

pub mod middleware;
pub mod policy;

pub use middleware::cors_middleware;
pub use policy::{CorsDecision, CorsPolicy};
