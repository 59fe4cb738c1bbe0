//! Observability subsystem.
//!
//! All components log through `tracing` with structured fields; the access
//! log in the HTTP layer emits one summary line per request. Log level is
//! configurable via `RUST_LOG` or the gateway config.

pub mod logging;
