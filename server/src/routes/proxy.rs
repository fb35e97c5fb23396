//! Same-origin forwarding to the WishingWall API.
//!
//! DESIGN
//! ======
//! Requests keep their method, path, query, body and end-to-end headers;
//! hop-by-hop headers and `Host` are dropped in both directions. Request bodies
//! are read up to `MAX_FORWARD_BODY_BYTES` (a full 20-image upload plus form
//! overhead); response bodies are streamed back as they arrive. Upstream status
//! codes and error bodies pass through untouched; only a failure to reach the
//! API is answered locally, with the same `{"detail": ...}` shape the API uses.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{self, HeaderName};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Headers scoped to a single connection (RFC 9110 section 7.6.1).
const HOP_BY_HOP: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

pub const UNAVAILABLE_DETAIL: &str = "The WishingWall API is unavailable";

/// Largest request body forwarded upstream.
pub const MAX_FORWARD_BODY_BYTES: usize = 201 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("upstream response rejected: {0}")]
    Response(String),
    #[error("request body unreadable: {0}")]
    Body(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api forwarding failed");
        let (status, detail) = match &self {
            Self::Upstream(e) if e.is_timeout() => (StatusCode::GATEWAY_TIMEOUT, UNAVAILABLE_DETAIL),
            Self::Body(_) => (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large"),
            _ => (StatusCode::BAD_GATEWAY, UNAVAILABLE_DETAIL),
        };
        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

/// `{base}{path}?{query}` for an incoming request URI.
#[must_use]
pub fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

#[must_use]
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(name)
}

fn forwards_request_header(name: &HeaderName) -> bool {
    !is_hop_by_hop(name) && name != header::HOST
}

/// Handler for `/api/*` and `/uploads/*`.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let url = upstream_url(&state.config.api_url, &parts.uri);

    let mut outbound = state.http.request(parts.method.clone(), &url);
    for (name, value) in &parts.headers {
        if forwards_request_header(name) {
            outbound = outbound.header(name, value);
        }
    }
    let bytes = axum::body::to_bytes(body, MAX_FORWARD_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;
    let upstream = outbound.body(bytes).send().await?;

    let status = upstream.status();
    tracing::debug!(method = %parts.method, upstream = %url, status = status.as_u16(), "forwarded");

    let mut response = Response::builder().status(status);
    for (name, value) in upstream.headers() {
        if !is_hop_by_hop(name) {
            response = response.header(name, value);
        }
    }
    response
        .body(Body::from_stream(upstream.bytes_stream()))
        .map_err(|e| ProxyError::Response(e.to_string()))
}
