//! Process-wide routing table snapshot holder.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::RoutesConfig;

/// Holder of the current routing table snapshot.
///
/// Reads are wait-free and always observe a fully-formed table; replacement
/// is a single atomic pointer swap. The old snapshot stays alive until the
/// last in-flight request referencing it finishes, then drops.
pub struct RouteStore {
    table: ArcSwap<RoutesConfig>,
}

impl RouteStore {
    /// Seed the store with the startup snapshot.
    pub fn new(initial: RoutesConfig) -> Self {
        Self {
            table: ArcSwap::from_pointee(initial),
        }
    }

    /// The current snapshot.
    ///
    /// Hold the returned `Arc` for the whole request so resolution never
    /// mixes two tables.
    pub fn current(&self) -> Arc<RoutesConfig> {
        self.table.load_full()
    }

    /// Atomically publish a new snapshot.
    pub fn replace(&self, next: RoutesConfig) {
        self.table.store(Arc::new(next));
    }
}
