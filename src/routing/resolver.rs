//! Top-segment route resolution.

use crate::config::reserved::ReservedSet;
use crate::config::schema::RoutesConfig;

/// Outcome of resolving a top segment against one snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The segment belongs to the gateway's own surface; never proxied.
    Reserved,
    /// The target origin of the earliest matching binding.
    Resolved(String),
    /// No binding matches; the caller reports route-not-found.
    Unresolved,
}

/// Resolve `top` against a single snapshot and the static reserved set.
///
/// The reserved set wins over any binding. Bindings are scanned linearly in
/// document order and the first match is taken, so duplicate prefixes
/// resolve deterministically to the earliest one.
pub fn resolve(top: &str, snapshot: &RoutesConfig, reserved: &ReservedSet) -> Decision {
    if reserved.contains(top) {
        return Decision::Reserved;
    }

    snapshot
        .routes
        .iter()
        .find(|binding| binding.path.strip_prefix('/') == Some(top))
        .map(|binding| Decision::Resolved(binding.target.clone()))
        .unwrap_or(Decision::Unresolved)
}
