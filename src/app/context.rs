//! Per-app view of the run: identity, data directory, flags, shared modules.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use crate::app::AppError;
use crate::config::LauncherConfig;
use crate::modules::{MeshClient, RuntimeModules};

/// Context handed to an app's factory and run loop.
#[derive(Debug, Clone)]
pub struct AppContext {
    id: String,
    config: Arc<LauncherConfig>,
    modules: RuntimeModules,
}

impl AppContext {
    pub fn new(id: impl Into<String>, config: Arc<LauncherConfig>, modules: RuntimeModules) -> Self {
        Self {
            id: id.into(),
            config,
            modules,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The search mesh client, or a setup error naming this app.
    pub fn require_mesh(&self) -> Result<Arc<MeshClient>, AppError> {
        self.modules
            .search_mesh
            .clone()
            .ok_or_else(|| AppError::setup(&self.id, "search mesh client is not configured"))
    }

    /// Directory reserved for this app under the global data dir.
    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.global.data_dir).join(&self.id)
    }

    /// Raw flag value from `start.flags`.
    pub fn flag(&self, name: &str) -> Option<&str> {
        self.config.start.flags.get(name).map(String::as_str)
    }

    /// Parsed flag value, `default` when unset.
    pub fn flag_or<T>(&self, name: &str, default: T) -> Result<T, AppError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.flag(name) {
            None => Ok(default),
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| AppError::setup(&self.id, format!("flag '{name}' = '{raw}': {e}"))),
        }
    }
}
