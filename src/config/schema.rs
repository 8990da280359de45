//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the launcher.
//! All types derive Serde traits for deserialization from config files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration for the launcher.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct LauncherConfig {
    /// Process-wide settings (data directory, shared module endpoints).
    pub global: GlobalConfig,

    /// Default app set and per-app flag defaults for `start`.
    pub start: StartConfig,

    /// Teardown policy.
    pub shutdown: ShutdownConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Addresses shown in the welcome message.
    pub welcome: WelcomeConfig,
}

/// Process-wide settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Directory under which apps keep their state.
    pub data_dir: String,

    /// DSN of the search mesh discovery service (e.g., "local://").
    pub mesh_dsn: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            data_dir: "./sf-data".to_string(),
            mesh_dsn: "local://".to_string(),
        }
    }
}

/// Settings for the `start` command.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StartConfig {
    /// Apps started when none are given on the command line.
    pub args: Vec<String>,

    /// Flag defaults handed to every app context.
    pub flags: BTreeMap<String, String>,
}

/// Teardown policy.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// Seconds to wait for apps to stop once shutdown begins.
    pub grace_secs: u64,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self { grace_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9102".to_string(),
        }
    }
}

/// Listen addresses advertised once the dashboard or API proxy is up.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WelcomeConfig {
    pub dashboard_addr: String,
    pub apiproxy_addr: String,
}

impl Default for WelcomeConfig {
    fn default() -> Self {
        Self {
            dashboard_addr: ":8081".to_string(),
            apiproxy_addr: ":8080".to_string(),
        }
    }
}
