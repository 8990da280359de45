//! Shutdown coordinator.
//!
//! # Protocol
//! ```text
//! select {
//!     OS signal          → SignalReceived, close() in the background
//!     TerminationNotice  → CleanShutdown (no error) or UnexpectedShutdown (error captured)
//! }
//! wait_for_termination()          (every path ends here)
//! captured error or launcher.err() → Failure, otherwise Goodbye → Success
//! ```

use std::future::Future;
use std::process::ExitCode;
use std::sync::Arc;

use crate::app::AppError;
use crate::launcher::{Launcher, TerminationNotice};
use crate::observability::events::{EventSink, LaunchEvent};

/// Final result of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure(AppError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    pub fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Failure(_) => ExitCode::FAILURE,
        }
    }
}

/// Race `signal` against the launcher's termination notice, then wait for teardown.
///
/// `signal` is usually [`wait_for_shutdown_signal`](crate::lifecycle::signals::wait_for_shutdown_signal).
/// If it fails to register, only app terminations can end the run.
pub async fn coordinate<S>(launcher: Arc<Launcher>, signal: S, sink: &dyn EventSink) -> Outcome
where
    S: Future<Output = std::io::Result<()>>,
{
    let signal = async {
        if let Err(e) = signal.await {
            tracing::warn!(error = %e, "Unable to listen for termination signals");
            std::future::pending::<()>().await;
        }
    };

    let notice = async {
        match launcher.terminating() {
            Some(rx) => rx.await.ok(),
            None => std::future::pending().await,
        }
    };

    let mut captured = None;
    tokio::select! {
        _ = signal => {
            sink.emit(&LaunchEvent::SignalReceived);
            let closing = Arc::clone(&launcher);
            tokio::spawn(async move { closing.close() });
        }
        notice = notice => match notice {
            Some(TerminationNotice { app, error: None }) => {
                sink.emit(&LaunchEvent::CleanShutdown { app });
            }
            Some(TerminationNotice { app, error: Some(error) }) => {
                sink.emit(&LaunchEvent::UnexpectedShutdown { app, error: error.clone() });
                captured = Some(error);
            }
            None => {
                tracing::info!("Launcher closed, waiting for applications to stop");
            }
        },
    }

    launcher.wait_for_termination().await;

    match captured.or_else(|| launcher.err()) {
        Some(error) => Outcome::Failure(error),
        None => {
            sink.emit(&LaunchEvent::Goodbye);
            Outcome::Success
        }
    }
}
