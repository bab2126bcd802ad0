//! Conversions between the message types and `axum`/`http` types.
//!
//! # Responsibilities
//! - Build a `Request` from an `http::Request` handed over by a transport
//! - Render a `Response` as an `axum` response (status, headers, body)
//!
//! # Design Decisions
//! - The outbound status is the two-tier classification, the stored code
//!   travels in `X-Response-Code`
//! - Overlay headers that are not valid HTTP are skipped, not fatal
//! - An empty inbound body is treated as absent

use std::collections::BTreeMap;

use axum::{
    http::{self, request::Parts, HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
};

use crate::http::codec::Classification;
use crate::http::request::{Request, RequestError};
use crate::http::response::Response;

impl Request {
    /// Build a request from transport parts and a buffered body.
    pub fn from_parts(parts: &Parts, body: Option<String>) -> Result<Self, RequestError> {
        let mut headers = BTreeMap::new();
        for (name, value) in parts.headers.iter() {
            let value = value
                .to_str()
                .map_err(|_| RequestError::InvalidHeaderValue {
                    name: name.to_string(),
                })?;
            headers.insert(name.to_string(), value.to_string());
        }

        Ok(Request::new(parts.method.as_str(), parts.uri.to_string())
            .with_headers(headers)
            .with_body(body.filter(|b| !b.is_empty())))
    }
}

impl TryFrom<http::Request<String>> for Request {
    type Error = RequestError;

    fn try_from(request: http::Request<String>) -> Result<Self, Self::Error> {
        let (parts, body) = request.into_parts();
        Request::from_parts(&parts, Some(body))
    }
}

impl Response {
    /// The derived headers as an `http::HeaderMap`.
    pub fn header_map(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in self.headers() {
            let parsed = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(&value),
            );
            match parsed {
                (Ok(name), Ok(value)) => {
                    map.insert(name, value);
                }
                _ => {
                    tracing::warn!(header = %name, "Skipping response header that is not valid HTTP");
                }
            }
        }
        map
    }

    fn http_status(&self) -> StatusCode {
        match self.classification() {
            Classification::Success => StatusCode::OK,
            Classification::Failure => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        tracing::debug!(
            code = self.code(),
            status = self.status_code(),
            overlay_headers = self.overlay().len(),
            "Rendering response"
        );
        (self.http_status(), self.header_map(), self.body()).into_response()
    }
}
