//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → data dir → shared modules → registry check
//!     → resolve app set → Launcher::launch → welcome message
//!
//! Coordination (coordinator.rs):
//!     OS signal | first app termination → close → wait for teardown → Outcome
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT/SIGQUIT → shutdown, no grace window
//!
//! Stop fan-out (shutdown.rs):
//!     Launcher triggers once → every app listener wakes
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal and nothing is left running
//! - Every path that started apps waits for their teardown before exiting
//! - Shutdown has a cap: stragglers are aborted after `shutdown.grace_secs`

pub mod coordinator;
pub mod shutdown;
pub mod signals;
pub mod startup;

pub use coordinator::{coordinate, Outcome};
pub use shutdown::{Shutdown, ShutdownListener};
pub use signals::wait_for_shutdown_signal;
pub use startup::{run_start, StartError, StartOptions};
