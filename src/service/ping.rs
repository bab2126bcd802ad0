//! Ping: echo a message back with a prefix.

use serde::Deserialize;

use crate::http::codec::NO_BODY_PROVIDED;
use crate::http::{Request, Response};
use crate::service::Handler;

/// Prefix used when none is configured.
pub const DEFAULT_REPLY_PREFIX: &str = "Pong: ";

/// Request id header echoed back on replies.
pub const X_REQUEST_ID: &str = "X-Request-Id";

/// Payload accepted by the ping endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PingRequest {
    pub message: String,
}

/// The ping operation.
#[derive(Debug, Clone)]
pub struct PingService {
    prefix: String,
}

impl PingService {
    /// Create a ping service replying with `prefix` + message.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The configured reply prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The reply text for `message`.
    pub fn reply(&self, message: &str) -> String {
        format!("{}{}", self.prefix, message)
    }
}

impl Default for PingService {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_PREFIX)
    }
}

impl Handler for PingService {
    fn handle(&self, request: &Request) -> Response {
        let mut response = match request.body() {
            None => {
                tracing::warn!(uri = %request.uri(), "Ping request without body");
                Response::new(400, NO_BODY_PROVIDED)
            }
            Some(body) => match serde_json::from_str::<PingRequest>(body) {
                Ok(ping) => {
                    tracing::debug!(message = %ping.message, "Ping received");
                    Response::new(200, self.reply(&ping.message))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Ping request without a message field");
                    Response::new(400, "Missing message field")
                }
            },
        };

        if let Some(id) = request.header(X_REQUEST_ID) {
            response.set_headers([(X_REQUEST_ID, id)]);
        }
        response
    }
}
