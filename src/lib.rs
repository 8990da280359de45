//! Multi-service launcher.
//!
//! Starts an arbitrary subset of named apps, races an OS termination signal
//! against the first app to stop, and drives every remaining app through a
//! bounded shutdown before deciding the process exit status.
//!
//! # Architecture Overview
//!
//! ```text
//!   CLI args / config
//!         │
//!         ▼
//!   ┌───────────┐   AppSet    ┌────────────┐  spawn   ┌───────┐ ┌───────┐
//!   │ registry  │────────────▶│  launcher  │─────────▶│ app A │ │ app B │ ...
//!   └───────────┘             └─────┬──────┘          └───┬───┘ └───┬───┘
//!                                   │  ▲ first termination │         │
//!                   TerminationNotice│  └──────────────────┴─────────┘
//!                                   ▼
//!   OS signal ──────────────▶ ┌─────────────┐  close / wait_for_termination
//!                             │ coordinator │──────────────────────────▶ Outcome
//!                             └─────────────┘
//!
//!   Cross-cutting: config (TOML), modules (search mesh), observability
//!   (named events → tracing, metrics)
//! ```

pub mod app;
pub mod apps;
pub mod cli;
pub mod config;
pub mod launcher;
pub mod lifecycle;
pub mod modules;
pub mod observability;
pub mod registry;

pub use app::{App, AppContext, AppError, FnApp};
pub use config::LauncherConfig;
pub use launcher::{LaunchError, Launcher, LauncherState, TerminationNotice};
pub use lifecycle::{coordinate, Outcome, Shutdown, ShutdownListener};
pub use registry::{AppDescriptor, AppRegistry, AppSet};
