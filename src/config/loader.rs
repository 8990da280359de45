//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::LauncherConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

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

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<LauncherConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<LauncherConfig, ConfigError> {
    let config: LauncherConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load configuration from `path`, or fall back to defaults when no path is given.
pub fn load_or_default(path: Option<&Path>) -> Result<LauncherConfig, ConfigError> {
    match path {
        Some(path) if !path.as_os_str().is_empty() => load_config(path),
        _ => Ok(LauncherConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = parse_config("").unwrap();
        assert!(config.start.args.is_empty());
        assert_eq!(config.shutdown.grace_secs, 30);
    }

    #[test]
    fn test_parse_start_section() {
        let config = parse_config(
            r#"
            [start]
            args = ["relayer", "merger"]

            [start.flags]
            heartbeat-interval-ms = "250"
            "#,
        )
        .unwrap();

        assert_eq!(config.start.args, vec!["relayer", "merger"]);
        assert_eq!(
            config.start.flags.get("heartbeat-interval-ms").map(String::as_str),
            Some("250")
        );
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = parse_config("[start\nargs = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_is_reported() {
        let err = parse_config("[shutdown]\ngrace_secs = 0").unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors, vec![ValidationError::ZeroGrace]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_path_uses_defaults() {
        let config = load_or_default(None).unwrap();
        assert_eq!(config.global.data_dir, "./sf-data");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/launcher.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
