//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the default app set for empty or repeated names
//! - Validate value ranges (grace > 0, metrics address parses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: LauncherConfig → Result<(), Vec<ValidationError>>

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::LauncherConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("start.args[{0}] is empty")]
    EmptyAppName(usize),

    #[error("start.args lists '{0}' more than once")]
    DuplicateApp(String),

    #[error("start.flags contains an empty key")]
    EmptyFlagKey,

    #[error("shutdown.grace_secs must be greater than zero")]
    ZeroGrace,

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &LauncherConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    for (idx, name) in config.start.args.iter().enumerate() {
        if name.trim().is_empty() {
            errors.push(ValidationError::EmptyAppName(idx));
        } else if !seen.insert(name.as_str()) {
            errors.push(ValidationError::DuplicateApp(name.clone()));
        }
    }

    if config.start.flags.keys().any(|k| k.trim().is_empty()) {
        errors.push(ValidationError::EmptyFlagKey);
    }

    if config.shutdown.grace_secs == 0 {
        errors.push(ValidationError::ZeroGrace);
    }

    let obs = &config.observability;
    if obs.metrics_enabled && obs.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidMetricsAddress(obs.metrics_address.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&LauncherConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = LauncherConfig::default();
        config.start.args = vec!["relayer".into(), "".into(), "relayer".into()];
        config.shutdown.grace_secs = 0;
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "nowhere".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyAppName(1),
                ValidationError::DuplicateApp("relayer".into()),
                ValidationError::ZeroGrace,
                ValidationError::InvalidMetricsAddress("nowhere".into()),
            ]
        );
    }

    #[test]
    fn test_metrics_address_ignored_when_disabled() {
        let mut config = LauncherConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_ok());
    }
}
