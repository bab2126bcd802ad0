//! Behaviour of the message model through the public API.

use std::collections::BTreeMap;

use ping_service::http::codec::{NO_BODY_PROVIDED, NO_MESSAGE_PROVIDED};
use ping_service::{Classification, Request, Response};

#[test]
fn test_request_identity() {
    let headers = BTreeMap::from([("Accept".to_string(), "*/*".to_string())]);
    for body in [None, Some(String::new()), Some("raw".to_string())] {
        let req = Request::new("PATCH", "/things/1")
            .with_headers(headers.clone())
            .with_body(body.clone());
        assert_eq!(req.method(), "PATCH");
        assert_eq!(req.uri(), "/things/1");
        assert_eq!(req.headers(), &headers);
        assert_eq!(req.body(), body.as_deref());
    }
}

#[test]
fn test_round_trip_preserves_fields() {
    let cases = [
        (200, "ok", vec![]),
        (201, "created", vec![("id", "17")]),
        (404, "not found", vec![("path", "/x"), ("hint", "")]),
        (599, "weird \"quoted\" text", vec![("unicode", "héllo ✓")]),
    ];

    for (code, message, pairs) in cases {
        let data: BTreeMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let original = Response::new(code, message).with_data(data);

        let mut decoded = Response::new(1, "placeholder");
        decoded.set_body(Some(&original.body()));

        assert_eq!(decoded.code(), original.code());
        assert_eq!(decoded.message(), original.message());
        assert_eq!(decoded.data(), original.data());
    }
}

#[test]
fn test_sentinel_defaults() {
    let mut response = Response::new(201, "created");
    response.set_body(None);
    assert_eq!(
        (response.code(), response.message()),
        (400, NO_BODY_PROVIDED)
    );

    response.set_body(Some("{}"));
    assert_eq!(
        (response.code(), response.message()),
        (200, NO_MESSAGE_PROVIDED)
    );

    let from_garbage = Response::from_body(Some("not json"));
    let from_empty = Response::from_body(Some("{}"));
    assert_eq!(from_garbage, from_empty);
}

#[test]
fn test_wire_example() {
    let response = Response::from_body(Some(r#"{"code":201,"message":"ok","data":{"x":1}}"#));
    assert_eq!(response.code(), 201);
    assert_eq!(response.message(), "ok");
    assert_eq!(response.data().get("x").map(String::as_str), Some("1"));
    assert_eq!(response.body(), r#"{"code":201,"data":{"x":"1"},"message":"ok"}"#);
}

#[test]
fn test_classification_and_headers_follow_code() {
    let mut response = Response::new(204, "no content");
    assert_eq!(response.classification(), Classification::Success);
    assert_eq!(response.status_code(), 200);

    for code in [100, 199, 300, 404, 500] {
        response.set_status_code(code);
        assert_eq!(response.status_code(), 400);
        let headers = response.headers();
        assert_eq!(headers["Content-Type"], "application/json");
        assert_eq!(headers["X-Response-Code"], code.to_string());
    }
}
