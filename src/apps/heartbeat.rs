//! Heartbeat app.
//!
//! # Flags
//! - `heartbeat-interval-ms`: tick period (default 1000)
//! - `heartbeat-fail-after`: fail after this many ticks, at least 1 (unset = never)

use std::time::Duration;

use tokio::time;

use crate::app::{App, AppContext, AppError, AppFuture};
use crate::lifecycle::shutdown::ShutdownListener;
use crate::registry::AppDescriptor;

pub const ID: &str = "heartbeat";

pub fn descriptor() -> AppDescriptor {
    AppDescriptor::new(
        ID,
        "Heartbeat",
        "Logs a tick at a fixed interval until stopped",
        |ctx| {
            let interval_ms: u64 = ctx.flag_or("heartbeat-interval-ms", 1000)?;
            if interval_ms == 0 {
                return Err(AppError::setup(ctx.id(), "heartbeat-interval-ms must be > 0"));
            }
            let fail_after = match ctx.flag("heartbeat-fail-after") {
                Some(_) => Some(ctx.flag_or::<u64>("heartbeat-fail-after", 0)?),
                None => None,
            };
            if fail_after == Some(0) {
                return Err(AppError::setup(ctx.id(), "heartbeat-fail-after must be > 0"));
            }
            Ok(Box::new(Heartbeat {
                interval: Duration::from_millis(interval_ms),
                fail_after,
            }))
        },
    )
}

struct Heartbeat {
    interval: Duration,
    fail_after: Option<u64>,
}

impl App for Heartbeat {
    fn run(self: Box<Self>, ctx: AppContext, mut stop: ShutdownListener) -> AppFuture {
        Box::pin(async move {
            let mut ticker = time::interval(self.interval);
            // The first tick completes immediately.
            ticker.tick().await;
            let mut ticks: u64 = 0;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        ticks += 1;
                        tracing::info!(ticks, "heartbeat");
                        if self.fail_after == Some(ticks) {
                            return Err(AppError::failed(ctx.id(), format!("fault drill after {ticks} ticks")));
                        }
                    }
                    _ = stop.recv() => {
                        tracing::debug!(ticks, "heartbeat received shutdown signal, exiting loop");
                        return Ok(());
                    }
                }
            }
        })
    }
}
