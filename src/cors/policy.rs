//! CORS policy and per-request decisions.
//!
//! # Responsibilities
//! - Hold the allowed-origin set, fixed at startup
//! - Decide per request: forward, forward decorated, preflight, or reject
//!
//! # Design Decisions
//! - Decision is a pure, total function of (policy, Origin header, method)
//! - Empty allow-list means permissive: every response gets `*`
//! - Requests without an Origin header are not cross-origin and are
//!   forwarded unmodified, even under a non-empty allow-list
//! - Origin matching is exact string comparison; no wildcards, no
//!   scheme/suffix rules

use axum::http::{HeaderValue, Method};

/// Fixed header list advertised to preflight requests, order preserved.
pub const ALLOW_HEADERS: &str = "User-Agent,Content-Type,Accept,Authorization";

/// Fixed method list advertised to preflight requests, order preserved.
pub const ALLOW_METHODS: &str = "GET,POST,PATCH,DELETE";

/// Immutable allowed-origin set, shared read-only across request tasks.
#[derive(Debug, Clone, Default)]
pub struct CorsPolicy {
    allow_origins: Vec<String>,
}

impl CorsPolicy {
    /// Build a policy from a comma-separated origin list. Empty segments
    /// are discarded; an empty result is the permissive policy.
    pub fn from_allow_origin(allow_origin: &str) -> Self {
        Self {
            allow_origins: allow_origin
                .split(',')
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    /// True when no origins are configured and every request is admitted
    /// with the wildcard.
    pub fn is_permissive(&self) -> bool {
        self.allow_origins.is_empty()
    }

    fn allows(&self, origin: &str) -> bool {
        self.allow_origins.iter().any(|o| o == origin)
    }

    /// Decide how to treat one request, given its Origin header and method.
    pub fn decide(&self, origin: Option<&HeaderValue>, method: &Method) -> CorsDecision {
        if self.is_permissive() {
            return admitted(HeaderValue::from_static("*"), method);
        }

        match origin {
            // No Origin header means the request is not cross-origin;
            // the allow-list does not apply to it.
            None => CorsDecision::Forward,
            Some(value) => match value.to_str() {
                Ok(origin) if self.allows(origin) => admitted(value.clone(), method),
                // Unknown origin, or one that is not valid UTF-8 and so
                // cannot be in the configured list.
                _ => CorsDecision::Reject,
            },
        }
    }
}

fn admitted(allow_origin: HeaderValue, method: &Method) -> CorsDecision {
    if *method == Method::OPTIONS {
        CorsDecision::Preflight { allow_origin }
    } else {
        CorsDecision::ForwardAllowed { allow_origin }
    }
}

/// Outcome of CORS admission for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// Forward to the inner handler; response untouched.
    Forward,
    /// Forward, setting `Access-Control-Allow-Origin` on the response.
    ForwardAllowed { allow_origin: HeaderValue },
    /// Terminate with a 204 preflight response carrying the CORS headers.
    /// The inner handler is never invoked.
    Preflight { allow_origin: HeaderValue },
    /// Terminate with a bare 204, no CORS headers, inner handler never
    /// invoked.
    Reject,
}
