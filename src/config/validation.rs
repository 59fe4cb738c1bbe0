//! Routing table validation.
//!
//! Serde handles the syntactic side; these are the semantic checks run
//! before a table is accepted into the store. All errors are collected so a
//! bad document is diagnosed in one pass rather than one field at a time.
//!
//! Duplicate paths are deliberately not rejected: resolution is first-match
//! in document order, and later duplicates are simply shadowed.

use url::Url;

use crate::config::schema::RoutesConfig;

/// A single semantic problem in a routes document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("route {index}: path {path:?} must be a single segment with a leading slash")]
    BadPath { index: usize, path: String },

    #[error("route {index}: target {target:?} must be an http(s) origin with no trailing slash")]
    BadTarget { index: usize, target: String },
}

/// Check a parsed table. Pure function; returns every error found.
pub fn validate_routes(config: &RoutesConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for (index, binding) in config.routes.iter().enumerate() {
        match binding.path.strip_prefix('/') {
            Some(segment) if !segment.is_empty() && !segment.contains('/') => {}
            _ => errors.push(ValidationError::BadPath {
                index,
                path: binding.path.clone(),
            }),
        }

        let target_ok = match Url::parse(&binding.target) {
            Ok(url) => {
                matches!(url.scheme(), "http" | "https") && !binding.target.ends_with('/')
            }
            Err(_) => false,
        };
        if !target_ok {
            errors.push(ValidationError::BadTarget {
                index,
                target: binding.target.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
