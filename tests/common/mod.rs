//! Shared helpers for integration tests.

use axum::body::to_bytes;
use ping_service::Request;

/// A POST to the default ping path carrying `{"message": <message>}`.
pub fn ping_request(message: &str) -> Request {
    let body = serde_json::json!({ "message": message }).to_string();
    Request::new("POST", "/api/ping").with_body(Some(body))
}

/// Read an axum response body as text.
#[allow(dead_code)]
pub async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
