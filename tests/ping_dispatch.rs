//! End-to-end: http request → Request → Router → Response → axum response.

use axum::http::{self, StatusCode};
use axum::response::IntoResponse;
use ping_service::{Request, Response, Router, ServiceConfig};

mod common;

#[test]
fn test_ping_through_router() {
    let router = Router::from_config(&ServiceConfig::default());
    let response = router.dispatch(&common::ping_request("hello"));

    assert_eq!(response.code(), 200);
    assert_eq!(response.message(), "Pong: hello");
}

#[tokio::test]
async fn test_http_round_trip() {
    let router = Router::from_config(&ServiceConfig::default());
    let http_req = http::Request::builder()
        .method("POST")
        .uri("/api/ping")
        .header("content-type", "application/json")
        .header("x-request-id", "req-9")
        .body(r#"{"message":"from http"}"#.to_string())
        .unwrap();

    let request = Request::try_from(http_req).unwrap();
    let rendered = router.dispatch(&request).into_response();

    assert_eq!(rendered.status(), StatusCode::OK);
    assert_eq!(rendered.headers().get("x-response-code").unwrap(), "200");
    assert_eq!(rendered.headers().get("x-request-id").unwrap(), "req-9");

    let body = common::body_text(rendered).await;
    let decoded = Response::from_body(Some(&body));
    assert_eq!(decoded.message(), "Pong: from http");
    assert_eq!(decoded.code(), 200);
}

#[tokio::test]
async fn test_unknown_route_is_classified_failure() {
    let router = Router::from_config(&ServiceConfig::default());
    let rendered = router
        .dispatch(&Request::new("GET", "/missing"))
        .into_response();

    assert_eq!(rendered.status(), StatusCode::BAD_REQUEST);
    assert_eq!(rendered.headers().get("x-response-code").unwrap(), "404");

    let decoded = Response::from_body(Some(&common::body_text(rendered).await));
    assert_eq!(decoded.message(), "No route matched");
}
