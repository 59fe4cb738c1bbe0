//! Routing table loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::RoutesConfig;
use crate::config::validation::{validate_routes, ValidationError};

/// Error type for routing table loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate the routing table from a JSON file.
///
/// At startup a failure here is fatal; on reload the caller logs it and
/// keeps the previous table.
pub fn load_routes(path: &Path) -> Result<RoutesConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: RoutesConfig = serde_json::from_str(&content)?;

    validate_routes(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "routegate-loader-{}-{}.json",
            std::process::id(),
            name
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_valid_document() {
        let path = write_temp(
            "valid",
            r#"{"routes": [{"path": "/openai", "target": "https://api.openai.com"}]}"#,
        );
        let config = load_routes(&path).unwrap();
        assert_eq!(config.routes[0].target, "https://api.openai.com");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("routegate-loader-does-not-exist.json");
        assert!(matches!(load_routes(&path), Err(ConfigError::Io(_))));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let path = write_temp("malformed", r#"{"routes": ["#);
        assert!(matches!(load_routes(&path), Err(ConfigError::Parse(_))));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn invalid_binding_is_validation_error() {
        let path = write_temp(
            "invalid",
            r#"{"routes": [{"path": "openai", "target": "https://api.openai.com"}]}"#,
        );
        assert!(matches!(
            load_routes(&path),
            Err(ConfigError::Validation(_))
        ));
        fs::remove_file(path).unwrap();
    }
}
