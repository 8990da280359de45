//! Built-in apps shipped with the binary.
//!
//! - `heartbeat`: periodic liveness log, optional fault drill
//! - `timer`: one-shot app that requests a clean shutdown when done
//! - `mesh-probe`: reports the search mesh endpoint, needs the mesh module

pub mod heartbeat;
pub mod mesh_probe;
pub mod timer;

use crate::registry::{AppRegistry, RegistryError};

/// Registry holding every built-in app.
pub fn builtin_registry() -> Result<AppRegistry, RegistryError> {
    let mut registry = AppRegistry::new();
    registry.register(heartbeat::descriptor())?;
    registry.register(timer::descriptor())?;
    registry.register(mesh_probe::descriptor())?;
    Ok(registry)
}
