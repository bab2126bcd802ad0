//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging through the `tracing` macros everywhere
//! - One subscriber, installed by the binary at startup
//! - `RUST_LOG` overrides the configured level

pub mod logging;
