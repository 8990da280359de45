//! Timer app: completes cleanly after a fixed duration.
//!
//! Stands for one-shot administrative jobs. Its clean completion ends the
//! whole run.
//!
//! # Flags
//! - `timer-duration-ms`: how long to wait (default 5000)

use std::time::Duration;

use crate::app::{App, AppContext, AppFuture};
use crate::lifecycle::shutdown::ShutdownListener;
use crate::registry::AppDescriptor;

pub const ID: &str = "timer";

pub fn descriptor() -> AppDescriptor {
    AppDescriptor::new(
        ID,
        "Timer",
        "Waits for a fixed duration then requests a clean shutdown",
        |ctx| {
            let duration_ms: u64 = ctx.flag_or("timer-duration-ms", 5000)?;
            Ok(Box::new(Timer {
                duration: Duration::from_millis(duration_ms),
            }))
        },
    )
}

struct Timer {
    duration: Duration,
}

impl App for Timer {
    fn run(self: Box<Self>, _ctx: AppContext, mut stop: ShutdownListener) -> AppFuture {
        Box::pin(async move {
            tokio::select! {
                _ = tokio::time::sleep(self.duration) => {
                    tracing::info!(duration_ms = self.duration.as_millis() as u64, "timer elapsed");
                }
                _ = stop.recv() => {
                    tracing::debug!("timer stopped before elapsing");
                }
            }
            Ok(())
        })
    }
}
