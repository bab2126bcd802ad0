//! HTTP message model.
//!
//! # Data Flow
//! ```text
//! transport fields (method, uri, headers, body)
//!     → request.rs (immutable Request)
//!     → [application logic / routing]
//!     → response.rs (mutable Response)
//!     → codec.rs (JSON body, classification, mandatory headers)
//!     → interop.rs (axum response) → transport
//! ```

pub mod codec;
pub mod headers;
pub mod interop;
pub mod request;
pub mod response;

pub use codec::Classification;
pub use request::{Request, RequestError};
pub use response::Response;
