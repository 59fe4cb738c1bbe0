//! Per-request context and request ids.

use std::time::{SystemTime, UNIX_EPOCH};

/// Transient record created for every inbound request.
///
/// Built by the extractor middleware, carried in request extensions, read
/// by the forwarder and the access log, dropped when the request ends.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Short time-based request id.
    pub id: String,

    /// First path segment, the routing key. `"openai"` for `/openai/v1/chat`.
    pub top: String,

    /// Remainder of the path including its leading slash; empty when the
    /// request had a single segment.
    pub subpath: String,

    /// Resolved target origin for proxy candidates; `None` on the reserved
    /// surface.
    pub origin: Option<String>,
}

/// Generate a request id: unix seconds plus six random digits.
pub fn generate_request_id() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}{:06}", now, fastrand::u32(0..1_000_000))
}
