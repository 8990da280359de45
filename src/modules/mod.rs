//! Shared runtime modules.
//!
//! # Data Flow
//! ```text
//! global.mesh_dsn
//!     → mesh.rs (MeshClient::new, fails on a malformed DSN)
//!     → RuntimeModules (constructed once by the caller)
//!     → handed to the launcher, cloned into every AppContext
//! ```
//!
//! # Design Decisions
//! - Construction failures are fatal and happen before any app starts
//! - Modules are optional; apps that need one fail their own setup

pub mod mesh;

use std::sync::Arc;

pub use mesh::{MeshClient, MeshError};

/// Modules shared by every app of a run.
#[derive(Debug, Clone, Default)]
pub struct RuntimeModules {
    /// Client of the search mesh discovery service.
    pub search_mesh: Option<Arc<MeshClient>>,
}

impl RuntimeModules {
    /// Build the modules from a mesh DSN.
    pub fn from_mesh_dsn(dsn: &str) -> Result<Self, MeshError> {
        let client = MeshClient::new(dsn)?;
        Ok(Self {
            search_mesh: Some(Arc::new(client)),
        })
    }
}
