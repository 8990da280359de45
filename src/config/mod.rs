//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → LauncherConfig (validated, immutable)
//!     → shared via Arc with the launcher and every app context
//! ```
//!
//! # Design Decisions
//! - Config is loaded once per process run
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    GlobalConfig, LauncherConfig, ObservabilityConfig, ShutdownConfig, StartConfig, WelcomeConfig,
};
pub use validation::ValidationError;
