//! Outbound response carrier.
//!
//! # Responsibilities
//! - Hold the outcome code, message and string-valued data
//! - Derive headers from the current code plus the caller overlay
//! - Render and parse the JSON body through the codec
//!
//! # Design Decisions
//! - `code()` is the stored value; `status_code()` is the two-tier
//!   classification. Both are exposed so neither hides the other
//! - Headers are computed on every call, never stored, so they track
//!   `set_status_code` and `set_headers`
//! - Nothing here fails; malformed bodies decode to sentinel defaults

use std::collections::BTreeMap;

use crate::http::codec::{self, Classification};
use crate::http::headers::HeaderOverlay;

/// An outbound response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    code: i64,
    message: String,
    data: BTreeMap<String, String>,
    overlay: HeaderOverlay,
}

impl Response {
    /// Create a response with no data and no extra headers.
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: BTreeMap::new(),
            overlay: HeaderOverlay::new(),
        }
    }

    /// Replace the data fields.
    pub fn with_data(mut self, data: BTreeMap<String, String>) -> Self {
        self.data = data;
        self
    }

    /// Build a response by decoding a JSON body.
    pub fn from_body(body: Option<&str>) -> Self {
        let mut response = Self::new(codec::DEFAULT_CODE, codec::NO_MESSAGE_PROVIDED);
        response.set_body(body);
        response
    }

    /// The stored code.
    pub fn code(&self) -> i64 {
        self.code
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The string-valued data fields.
    pub fn data(&self) -> &BTreeMap<String, String> {
        &self.data
    }

    /// Two-tier status: 200 for a stored code in `[200, 300)`, otherwise 400.
    pub fn status_code(&self) -> u16 {
        self.classification().as_status()
    }

    /// The two-tier classification of the stored code.
    pub fn classification(&self) -> Classification {
        codec::classify(self.code)
    }

    /// True if the stored code is in `[200, 300)`.
    pub fn is_success(&self) -> bool {
        self.classification() == Classification::Success
    }

    /// Current headers: the mandatory pair with the overlay on top.
    pub fn headers(&self) -> BTreeMap<String, String> {
        self.overlay.apply(codec::standard_headers(self.code))
    }

    /// Merge headers into the set returned by later `headers()` calls.
    pub fn set_headers<I, K, V>(&mut self, headers: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.overlay.merge(headers);
    }

    pub(crate) fn overlay(&self) -> &HeaderOverlay {
        &self.overlay
    }

    /// The JSON body text.
    pub fn body(&self) -> String {
        codec::encode(self.code, &self.message, &self.data)
    }

    /// Replace code, message and data with the decoded contents of `body`.
    ///
    /// The header overlay is left untouched.
    pub fn set_body(&mut self, body: Option<&str>) {
        let decoded = codec::decode(body);
        self.code = decoded.code;
        self.message = decoded.message;
        self.data = decoded.data;
    }

    /// Set the message without validation.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Set the stored code (not the derived classification).
    pub fn set_status_code(&mut self, code: i64) {
        self.code = code;
    }
}
