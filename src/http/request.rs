//! Inbound request value object.
//!
//! # Responsibilities
//! - Carry method, URI, headers and optional body as supplied by a transport
//! - Expose them unchanged
//! - Extract routing-relevant information (path, header lookup)
//!
//! # Design Decisions
//! - Immutable once built; builders consume `self`
//! - No validation: method and URI are stored exactly as given

use std::collections::BTreeMap;

use axum::http::Uri;
use thiserror::Error;

/// Errors raised while converting transport requests.
#[derive(Debug, Error)]
pub enum RequestError {
    /// A header value was not valid UTF-8 text.
    #[error("header {name} has a non-text value")]
    InvalidHeaderValue { name: String },
}

/// An inbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    method: String,
    uri: String,
    headers: BTreeMap<String, String>,
    body: Option<String>,
}

impl Request {
    /// Create a request with no headers and no body.
    pub fn new(method: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            uri: uri.into(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    /// Replace all headers.
    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Add a single header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Set the body; `None` means no body was supplied.
    pub fn with_body(mut self, body: Option<String>) -> Self {
        self.body = body;
        self
    }

    /// The method, case as supplied.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The URI exactly as supplied.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The headers exactly as supplied.
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// The body, if one was supplied.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// The URI path, without query string or fragment.
    ///
    /// Absolute URIs (`http://host/path`) are reduced to their path. Text that
    /// is not a valid URI is cut at the first `?` or `#`.
    pub fn path(&self) -> String {
        match self.uri.parse::<Uri>() {
            Ok(uri) => uri.path().to_string(),
            Err(_) => {
                let end = self
                    .uri
                    .find(|c: char| c == '?' || c == '#')
                    .unwrap_or(self.uri.len());
                self.uri[..end].to_string()
            }
        }
    }

    /// Look up a header, ignoring the case of its name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
