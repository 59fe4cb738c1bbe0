//! Configuration schema definitions.
//!
//! Process settings come from the environment; the routing table comes from
//! a JSON document that is reloaded while the gateway is running.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Process-level gateway configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Port the listener binds on (`PORT`).
    pub port: u16,

    /// Path of the hot-reloadable routes document (`ROUTES_FILE`).
    pub routes_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl GatewayConfig {
    /// Read settings from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            routes_file: std::env::var("ROUTES_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.routes_file),
            log_filter: defaults.log_filter,
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: 7777,
            routes_file: PathBuf::from("routes.json"),
            log_filter: "routegate=debug,tower_http=info".to_string(),
        }
    }
}

/// One binding in the routing table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteBinding {
    /// Single leading-slash path segment, e.g. `"/openai"`.
    pub path: String,

    /// Origin the segment forwards to: scheme + host, no trailing slash.
    pub target: String,
}

/// A full routing table as parsed from the routes document.
///
/// Published as one immutable snapshot and never mutated in place; a change
/// to the document produces a whole new table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RoutesConfig {
    #[serde(default)]
    pub routes: Vec<RouteBinding>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_document_parses() {
        let doc = r#"{"routes": [{"path": "/openai", "target": "https://api.openai.com"}]}"#;
        let config: RoutesConfig = serde_json::from_str(doc).unwrap();
        assert_eq!(config.routes.len(), 1);
        assert_eq!(config.routes[0].path, "/openai");
        assert_eq!(config.routes[0].target, "https://api.openai.com");
    }

    #[test]
    fn missing_routes_key_is_empty_table() {
        let config: RoutesConfig = serde_json::from_str("{}").unwrap();
        assert!(config.routes.is_empty());
    }
}
