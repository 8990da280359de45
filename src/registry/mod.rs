//! App registry and app set resolution.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     builtin_registry() / register(AppDescriptor)
//!     → AppRegistry (id → descriptor)
//!     → validate() before any launch
//!
//! Start command:
//!     CLI args (or start.args from config when none given)
//!     → app_set.rs (split, dedupe, drop empties)
//!     → AppSet handed to Launcher::launch
//! ```
//!
//! # Design Decisions
//! - Ids are matched exactly and case-sensitively
//! - Registration rejects duplicate ids instead of silently replacing
//! - Unknown ids are detected by the launcher, before anything is started

pub mod app_set;
pub mod descriptor;

use std::collections::BTreeMap;

use thiserror::Error;

pub use app_set::AppSet;
pub use descriptor::{AppDescriptor, AppFactory};

/// Errors raised by the registry and app set resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("application '{0}' is already registered")]
    Duplicate(String),

    #[error("no application registered")]
    Empty,

    #[error("no application to launch: none given and start.args is empty")]
    EmptyAppSet,
}

/// Known apps, keyed by id.
#[derive(Default)]
pub struct AppRegistry {
    apps: BTreeMap<String, AppDescriptor>,
}

impl AppRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, descriptor: AppDescriptor) -> Result<(), RegistryError> {
        if self.apps.contains_key(&descriptor.id) {
            return Err(RegistryError::Duplicate(descriptor.id));
        }
        self.apps.insert(descriptor.id.clone(), descriptor);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&AppDescriptor> {
        self.apps.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.apps.contains_key(id)
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        self.apps.keys().map(String::as_str).collect()
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.apps.values()
    }

    /// Check the registry is usable before launching from it.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.apps.is_empty() {
            return Err(RegistryError::Empty);
        }
        Ok(())
    }
}

impl std::fmt::Debug for AppRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppRegistry")
            .field("apps", &self.ids())
            .finish()
    }
}
