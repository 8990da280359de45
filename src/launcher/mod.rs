//! Launcher subsystem: lifecycle of the active app set.
//!
//! # Data Flow
//! ```text
//! launch(AppSet):
//!     registry lookup (unknown id → LaunchError, nothing started)
//!     → factories build every app (setup error → LaunchError, nothing started)
//!     → spawn app + monitor task per app
//!
//! monitor task (one per app):
//!     app future completes (Ok / Err / panic / abort)
//!     → record error (first one wins)
//!     → first terminator sends TerminationNotice
//!     → Running → ShuttingDown, stop signal to every app
//!
//! wait_for_termination():
//!     wait for shutdown to begin → drain monitors within grace
//!     → abort stragglers → Terminated
//! ```
//!
//! # Design Decisions
//! - All state lives behind one mutex so "first terminator wins" is exact
//! - close() is idempotent and never blocks
//! - Teardown is always bounded by the grace period

pub mod error;
pub mod notice;
pub mod runtime;
pub mod state;

pub use error::LaunchError;
pub use notice::TerminationNotice;
pub use runtime::Launcher;
pub use state::LauncherState;
