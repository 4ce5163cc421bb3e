//! Axum middleware applying the CORS policy.
//!
//! # Responsibilities
//! - Read the Origin header and method from each inbound request
//! - Map the policy decision onto the response: decorate, short-circuit
//!   with a preflight/reject 204, or pass through untouched
//! - Emit one info log line per preflight request

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::cors::policy::{CorsDecision, CorsPolicy, ALLOW_HEADERS, ALLOW_METHODS};

pub async fn cors_middleware(
    State(policy): State<Arc<CorsPolicy>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    match policy.decide(req.headers().get(header::ORIGIN), req.method()) {
        CorsDecision::Forward => next.run(req).await,
        CorsDecision::ForwardAllowed { allow_origin } => {
            let mut response = next.run(req).await;
            response
                .headers_mut()
                .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
            response
        }
        CorsDecision::Preflight { allow_origin } => {
            preflight_response(allow_origin, req.uri().path())
        }
        CorsDecision::Reject => StatusCode::NO_CONTENT.into_response(),
    }
}

/// Build the fixed preflight response: 204, empty body, the allow-origin
/// decided by the policy, and the literal header/method lists.
fn preflight_response(allow_origin: HeaderValue, path: &str) -> Response {
    tracing::info!(path = %path, "Preflight request");

    let mut response = StatusCode::NO_CONTENT.into_response();
    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    response
}
