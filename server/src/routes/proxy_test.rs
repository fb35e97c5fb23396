use std::net::{IpAddr, Ipv4Addr};

use axum::Router;
use axum::body::to_bytes;
use axum::http::Method;
use serde_json::{Value, json};
use tower::ServiceExt;

use super::*;
use crate::config::{ApiTimeouts, Config};
use crate::routes::host_routes;

fn state_for(api_url: String) -> AppState {
    AppState::new(Config {
        bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: 0,
        api_url,
        timeouts: ApiTimeouts { request_secs: 5, connect_secs: 1 },
    })
    .unwrap()
}

/// Upstream stand-in that echoes what it received.
async fn echo(request: Request) -> Response {
    let (parts, body) = request.into_parts();
    if parts.uri.path().ends_with("/missing") {
        return (StatusCode::NOT_FOUND, Json(json!({ "detail": "Wall not found" }))).into_response();
    }
    let body = to_bytes(body, usize::MAX).await.unwrap();
    let seen = json!({
        "method": parts.method.as_str(),
        "uri": parts.uri.to_string(),
        "authorization": parts.headers.get("authorization").and_then(|v| v.to_str().ok()),
        "body": String::from_utf8_lossy(&body),
    });
    (StatusCode::OK, [("x-upstream", "echo")], Json(seen)).into_response()
}

async fn spawn_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, Router::new().fallback(echo)).await.unwrap();
    });
    format!("http://{addr}")
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn upstream_url_keeps_path_and_query() {
    let uri: Uri = "/api/v1/walls/verify/aB3dE6gH9k?passcode=123456".parse().unwrap();
    assert_eq!(
        upstream_url("http://api:8000/", &uri),
        "http://api:8000/api/v1/walls/verify/aB3dE6gH9k?passcode=123456"
    );
    let uri: Uri = "/uploads/abc.png".parse().unwrap();
    assert_eq!(upstream_url("http://api:8000", &uri), "http://api:8000/uploads/abc.png");
}

#[test]
fn hop_by_hop_headers_are_not_forwarded() {
    assert!(is_hop_by_hop(&header::CONNECTION));
    assert!(is_hop_by_hop(&HeaderName::from_static("keep-alive")));
    assert!(is_hop_by_hop(&header::TRANSFER_ENCODING));
    assert!(!is_hop_by_hop(&header::AUTHORIZATION));
    assert!(!is_hop_by_hop(&header::CONTENT_TYPE));
    assert!(!forwards_request_header(&header::HOST));
    assert!(forwards_request_header(&header::AUTHORIZATION));
}

#[tokio::test]
async fn forwards_method_path_query_headers_and_body() {
    let app = host_routes(state_for(spawn_upstream().await));
    let request = axum::http::Request::builder()
        .method(Method::PUT)
        .uri("/api/v1/walls/7?expand=1")
        .header("authorization", "Bearer tok")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"is_public":true}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-upstream"], "echo");

    let seen = json_body(response).await;
    assert_eq!(seen["method"], "PUT");
    assert_eq!(seen["uri"], "/api/v1/walls/7?expand=1");
    assert_eq!(seen["authorization"], "Bearer tok");
    assert_eq!(seen["body"], r#"{"is_public":true}"#);
}

#[tokio::test]
async fn upstream_errors_pass_through_unchanged() {
    let app = host_routes(state_for(spawn_upstream().await));
    let request = axum::http::Request::builder()
        .uri("/api/v1/walls/missing")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await, json!({ "detail": "Wall not found" }));
}

#[tokio::test]
async fn uploads_are_forwarded_too() {
    let app = host_routes(state_for(spawn_upstream().await));
    let request = axum::http::Request::builder()
        .uri("/uploads/photo.jpg")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(json_body(response).await["uri"], "/uploads/photo.jpg");
}

#[tokio::test]
async fn unreachable_api_answers_bad_gateway_with_detail() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let app = host_routes(state_for(format!("http://{addr}")));
    let request = axum::http::Request::builder()
        .uri("/api/v1/walls")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(json_body(response).await, json!({ "detail": UNAVAILABLE_DETAIL }));
}
