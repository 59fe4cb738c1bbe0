//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → path.rs (split into top segment + subpath)
//!     → resolver.rs (reserved set check, then first-match scan of one
//!       snapshot from store.rs)
//!     → Decision: Reserved / Resolved(origin) / Unresolved
//! ```
//!
//! # Design Decisions
//! - Snapshots are immutable; the store swaps whole tables atomically
//! - No locks on the read path; the snapshot is fetched once per request
//! - Deterministic: the same (top, snapshot, reserved) triple always yields
//!   the same decision; first match wins

pub mod path;
pub mod resolver;
pub mod store;

pub use resolver::Decision;
pub use store::RouteStore;
