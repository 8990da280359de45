//! Closure-backed app (`FnApp`).
//!
//! Wraps an `FnOnce(AppContext, ShutdownListener) -> Fut`, so small services
//! and test doubles don't need their own type.

use std::future::Future;

use crate::app::{App, AppError, AppFuture, AppContext};
use crate::lifecycle::shutdown::ShutdownListener;

/// Function-backed app implementation.
pub struct FnApp<F> {
    f: F,
}

impl<F, Fut> FnApp<F>
where
    F: FnOnce(AppContext, ShutdownListener) -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), AppError>> + Send + 'static,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }

    /// Creates the app and returns it boxed, ready for a factory.
    pub fn boxed(f: F) -> Box<dyn App> {
        Box::new(Self::new(f))
    }
}

impl<F, Fut> App for FnApp<F>
where
    F: FnOnce(AppContext, ShutdownListener) -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), AppError>> + Send + 'static,
{
    fn run(self: Box<Self>, ctx: AppContext, stop: ShutdownListener) -> AppFuture {
        Box::pin((self.f)(ctx, stop))
    }
}
