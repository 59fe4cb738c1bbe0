//! HTTP subsystem: server surface, middleware and the forwarding engine.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → middleware.rs (request id, path decomposition, route resolution)
//!     → api.rs (reserved /api surface)
//!       or proxy.rs (forwarding engine → origin → relayed response)
//!     → error JSON from response.rs on any pre-commit failure
//! ```

pub mod api;
pub mod middleware;
pub mod proxy;
pub mod request;
pub mod response;
pub mod server;

pub use request::RequestContext;
pub use server::{AppState, HttpServer};
