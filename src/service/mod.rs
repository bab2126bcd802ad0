//! Application logic.
//!
//! # Data Flow
//! ```text
//! Request
//!     → routing (pick handler)
//!     → Handler::handle
//!     → Response
//! ```
//!
//! # Design Decisions
//! - Handlers are synchronous and hold only immutable state
//! - Handlers never fail; problems are reported through the Response code

pub mod ping;

pub use ping::PingService;

use crate::http::{Request, Response};

/// Application logic that turns a request into a response.
pub trait Handler: Send + Sync {
    fn handle(&self, request: &Request) -> Response;
}

impl<F> Handler for F
where
    F: Fn(&Request) -> Response + Send + Sync,
{
    fn handle(&self, request: &Request) -> Response {
        self(request)
    }
}
