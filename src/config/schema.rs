//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::service::ping::DEFAULT_REPLY_PREFIX;

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Ping endpoint settings.
    pub ping: PingConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Ping endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PingConfig {
    /// Path the ping handler is registered on (POST).
    pub path: String,

    /// Text prepended to the echoed message.
    pub reply_prefix: String,
}

impl Default for PingConfig {
    fn default() -> Self {
        Self {
            path: "/api/ping".to_string(),
            reply_prefix: DEFAULT_REPLY_PREFIX.to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
