//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! routes file (JSON)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RoutesConfig (validated, immutable snapshot)
//!     → published to routing::store
//!
//! On reload:
//!     watcher.rs detects change
//!     → loader.rs loads new table
//!     → validation.rs validates
//!     → atomic swap in the store
//!     → in-flight requests keep their snapshot; new requests see the new one
//! ```
//!
//! # Design Decisions
//! - A snapshot is immutable once published; changes require a full reload
//! - Reload failure keeps the previous table (availability over freshness)
//! - The reserved set is static and never reloads

pub mod loader;
pub mod reserved;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_routes, ConfigError};
pub use reserved::ReservedSet;
pub use schema::{GatewayConfig, RouteBinding, RoutesConfig};
pub use watcher::{RouteWatcher, WatchHandle};
