//! Upstream request forwarding.
//!
//! # Responsibilities
//! - Rewrite the request URI to target the configured upstream
//! - Forward the request once over a shared hyper client
//! - Map transport failures to 502 without retrying
//!
//! # Design Decisions
//! - Exactly one attempt per inbound request; resilience belongs to the
//!   upstream collaborator, not this gateway
//! - Response bodies are streamed, not buffered

use axum::{
    body::Body,
    extract::State,
    http::{
        uri::{Authority, Scheme},
        Request, StatusCode, Uri,
    },
    response::{IntoResponse, Response},
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

/// State shared by the forwarding handler.
#[derive(Clone)]
pub struct UpstreamState {
    pub authority: Authority,
    pub client: Client<HttpConnector, Body>,
}

impl UpstreamState {
    pub fn new(authority: Authority) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());
        Self { authority, client }
    }
}

/// Forward a request to the upstream service, at most once.
pub async fn forward(State(state): State<UpstreamState>, request: Request<Body>) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let (mut parts, body) = request.into_parts();

    // Point the request at the upstream; path and query pass through as-is.
    let mut uri_parts = parts.uri.clone().into_parts();
    uri_parts.scheme = Some(Scheme::HTTP);
    uri_parts.authority = Some(state.authority.clone());
    parts.uri = Uri::from_parts(uri_parts).unwrap_or_else(|_| parts.uri.clone());

    tracing::debug!(
        method = %method,
        path = %path,
        upstream = %state.authority,
        "Forwarding request"
    );

    match state.client.request(Request::from_parts(parts, body)).await {
        Ok(response) => {
            let (parts, body) = response.into_parts();
            Response::from_parts(parts, Body::new(body))
        }
        Err(e) => {
            tracing::error!(
                error = %e,
                upstream = %state.authority,
                "Upstream request failed"
            );
            (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
        }
    }
}
