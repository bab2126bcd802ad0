//! Ping service: a typed HTTP message model with a canonical JSON codec,
//! and the ping handler built on it.

pub mod config;
pub mod http;
pub mod observability;
pub mod routing;
pub mod service;

pub use config::ServiceConfig;
pub use http::{Classification, Request, Response};
pub use routing::Router;
pub use service::{Handler, PingService};
