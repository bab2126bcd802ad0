//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (route lookup)
//!     → matcher.rs (evaluate match conditions)
//!     → Handler, or a 404 Response
//! ```
//!
//! # Design Decisions
//! - Routes registered at startup, immutable afterwards
//! - Exact path matching, no patterns
//! - Deterministic: same input always matches same route

pub mod matcher;
pub mod router;

pub use router::{Router, NO_ROUTE_MATCHED};
