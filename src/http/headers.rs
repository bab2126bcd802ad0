//! Response header names and the caller overlay.
//!
//! # Responsibilities
//! - Name the two mandatory response headers
//! - Merge caller-supplied headers into an overlay
//! - Combine the overlay with the mandatory headers
//!
//! # Design Decisions
//! - Header names compare case-insensitively (per HTTP)
//! - Mandatory headers always win over the overlay; a caller can add
//!   headers but never remove or rewrite `Content-Type` / `X-Response-Code`
//! - A later overlay entry replaces an earlier one with the same name

use std::collections::BTreeMap;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const X_RESPONSE_CODE: &str = "X-Response-Code";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Returns true if `name` is one of the headers the response always derives.
pub fn is_mandatory(name: &str) -> bool {
    name.eq_ignore_ascii_case(CONTENT_TYPE) || name.eq_ignore_ascii_case(X_RESPONSE_CODE)
}

/// Caller-supplied headers layered over the derived ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderOverlay {
    entries: BTreeMap<String, String>,
}

impl HeaderOverlay {
    /// Create an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge headers into the overlay.
    ///
    /// Mandatory names are ignored. An existing entry whose name differs
    /// only in case is replaced.
    pub fn merge<I, K, V>(&mut self, headers: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            let name = name.into();
            if is_mandatory(&name) {
                tracing::debug!(header = %name, "Ignoring override of mandatory response header");
                continue;
            }
            self.entries.retain(|existing, _| !existing.eq_ignore_ascii_case(&name));
            self.entries.insert(name, value.into());
        }
    }

    /// Number of caller-supplied headers.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The overlay applied on top of `base`.
    pub fn apply(&self, mut base: BTreeMap<String, String>) -> BTreeMap<String, String> {
        for (name, value) in &self.entries {
            base.insert(name.clone(), value.clone());
        }
        base
    }
}
