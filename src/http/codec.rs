//! JSON wire codec for responses.
//!
//! # Responsibilities
//! - Render `{code, message, data}` as canonical JSON
//! - Decode inbound JSON back into the three fields
//! - Classify a stored code into the two-tier status
//! - Produce the mandatory response headers
//!
//! # Design Decisions
//! - Decoding never fails: malformed or absent input degrades to defaults
//! - Callers detect malformed input through the sentinel defaults
//!   (`NO_MESSAGE_PROVIDED`, `NO_BODY_PROVIDED`, code 400)
//! - Keys are emitted in sorted order so equal responses encode identically

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::http::headers::{CONTENT_TYPE, JSON_CONTENT_TYPE, X_RESPONSE_CODE};

/// Message used when the decoded body carries no usable message.
pub const NO_MESSAGE_PROVIDED: &str = "No message provided";

/// Message used when there was no body to decode at all.
pub const NO_BODY_PROVIDED: &str = "No body provided";

/// Code used when the decoded body carries no usable code.
pub const DEFAULT_CODE: i64 = 200;

/// Code used when there was no body to decode at all.
pub const MISSING_BODY_CODE: i64 = 400;

/// Two-tier simplification of a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Stored code is in `[200, 300)`.
    Success,
    /// Anything else.
    Failure,
}

impl Classification {
    /// The HTTP status this classification maps to.
    pub fn as_status(self) -> u16 {
        match self {
            Classification::Success => 200,
            Classification::Failure => 400,
        }
    }
}

/// Classify a stored code.
pub fn classify(code: i64) -> Classification {
    if (200..300).contains(&code) {
        Classification::Success
    } else {
        Classification::Failure
    }
}

/// Fields recovered from a JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub code: i64,
    pub message: String,
    pub data: BTreeMap<String, String>,
}

/// Encode the three body fields as JSON text.
pub fn encode(code: i64, message: &str, data: &BTreeMap<String, String>) -> String {
    let data: Map<String, Value> = data
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();

    let mut body = Map::new();
    body.insert("code".to_string(), Value::from(code));
    body.insert("message".to_string(), Value::String(message.to_string()));
    body.insert("data".to_string(), Value::Object(data));

    Value::Object(body).to_string()
}

/// Decode JSON text into body fields.
///
/// `None` means no body was supplied and yields the missing-body defaults.
/// Anything that is not a JSON object is read as an empty object.
pub fn decode(body: Option<&str>) -> Decoded {
    let Some(text) = body else {
        tracing::debug!("No body supplied, using missing-body defaults");
        return Decoded {
            code: MISSING_BODY_CODE,
            message: NO_BODY_PROVIDED.to_string(),
            data: BTreeMap::new(),
        };
    };

    let fields = match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            tracing::debug!(kind = json_kind(&other), "Body is not a JSON object, treating as empty");
            Map::new()
        }
        Err(e) => {
            tracing::debug!(error = %e, "Body is not valid JSON, treating as empty");
            Map::new()
        }
    };

    let data = match fields.get("data") {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(k, v)| (k.clone(), stringify(v)))
            .collect(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), stringify(v)))
            .collect(),
        _ => BTreeMap::new(),
    };

    let message = match fields.get("message") {
        Some(Value::String(s)) if !s.is_empty() => s.clone(),
        _ => NO_MESSAGE_PROVIDED.to_string(),
    };

    let code = match fields.get("code").and_then(coerce_code) {
        Some(0) | None => DEFAULT_CODE,
        Some(code) => code,
    };

    Decoded { code, message, data }
}

/// Render a scalar the way it appears as text. Non-scalars become empty.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map(|f| f.to_string()).unwrap_or_default()
            }
        }
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) | Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    }
}

/// Integer code from a JSON value. Floats and numeric strings truncate toward zero.
fn coerce_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => parse_numeric(s),
        _ => None,
    }
}

fn parse_numeric(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty()
        || !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }

    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| trimmed.parse::<f64>().ok().and_then(truncate))
}

// `as` saturates at the i64 bounds.
fn truncate(f: f64) -> Option<i64> {
    f.is_finite().then(|| f.trunc() as i64)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// The two headers every response carries.
pub fn standard_headers(code: i64) -> BTreeMap<String, String> {
    BTreeMap::from([
        (CONTENT_TYPE.to_string(), JSON_CONTENT_TYPE.to_string()),
        (X_RESPONSE_CODE.to_string(), code.to_string()),
    ])
}
