//! App abstraction.
//!
//! # Data Flow
//! ```text
//! AppDescriptor.factory(&AppContext)
//!     → Box<dyn App>
//!     → App::run(ctx, stop) spawned by the launcher
//!     → Ok(())  = clean termination (requests process-wide shutdown)
//!     → Err(e)  = service failure (recorded as the run's error)
//! ```
//!
//! # Design Decisions
//! - Apps own their future; the launcher only spawns and observes it
//! - Stop is cooperative: apps watch their `ShutdownListener`
//! - Errors are `Clone` so the first one can be reported and stored

pub mod app_fn;
pub mod context;
pub mod error;

use std::future::Future;
use std::pin::Pin;

use crate::lifecycle::shutdown::ShutdownListener;

pub use app_fn::FnApp;
pub use context::AppContext;
pub use error::AppError;

/// Boxed future returned by [`App::run`].
pub type AppFuture = Pin<Box<dyn Future<Output = Result<(), AppError>> + Send + 'static>>;

/// An independently runnable service.
///
/// `run` is called exactly once. Implementations should return promptly
/// after `stop` fires.
pub trait App: Send + 'static {
    fn run(self: Box<Self>, ctx: AppContext, stop: ShutdownListener) -> AppFuture;
}
