//! Top segments owned by the gateway itself.

use std::collections::HashSet;
use std::sync::Arc;

/// Set of top path segments that are never proxied.
///
/// Fixed for the lifetime of the process; hot reload does not touch it.
#[derive(Debug, Clone)]
pub struct ReservedSet {
    segments: Arc<HashSet<&'static str>>,
}

impl ReservedSet {
    /// The standard set: the gateway's own API surface lives under `/api`.
    pub fn standard() -> Self {
        Self::from_segments(["api"])
    }

    pub fn from_segments<I>(segments: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        Self {
            segments: Arc::new(segments.into_iter().collect()),
        }
    }

    pub fn contains(&self, top: &str) -> bool {
        self.segments.contains(top)
    }
}
