//! Named lifecycle events emitted by the launch/shutdown core.

use std::sync::Mutex;

use crate::app::AppError;

/// A discrete lifecycle transition, rendered by an [`EventSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchEvent {
    /// The `start` command began.
    Starting {
        config_file: Option<String>,
        data_dir: String,
    },
    /// The launcher is about to start the given app set.
    Launching { apps: Vec<String> },
    /// One app has been spawned.
    AppStarted { app: String },
    /// One app stopped running, cleanly (`error == None`) or not.
    AppTerminated {
        app: String,
        error: Option<AppError>,
    },
    /// An OS termination signal was observed.
    SignalReceived,
    /// An app asked for a process-wide shutdown without error.
    CleanShutdown { app: String },
    /// An app failed and brought the process down.
    UnexpectedShutdown { app: String, error: AppError },
    /// The launcher started stopping every app.
    ShutdownStarted,
    /// Every app confirmed it stopped.
    TeardownComplete,
    /// Apps still running when the grace period ran out.
    GraceExceeded { stuck: Vec<String> },
    /// The run ended successfully.
    Goodbye,
}

impl LaunchEvent {
    /// Stable event name, suitable as a log field or metric label.
    pub fn name(&self) -> &'static str {
        match self {
            LaunchEvent::Starting { .. } => "starting",
            LaunchEvent::Launching { .. } => "launching",
            LaunchEvent::AppStarted { .. } => "app_started",
            LaunchEvent::AppTerminated { .. } => "app_terminated",
            LaunchEvent::SignalReceived => "signal_received",
            LaunchEvent::CleanShutdown { .. } => "clean_shutdown",
            LaunchEvent::UnexpectedShutdown { .. } => "unexpected_shutdown",
            LaunchEvent::ShutdownStarted => "shutdown_started",
            LaunchEvent::TeardownComplete => "teardown_complete",
            LaunchEvent::GraceExceeded { .. } => "grace_exceeded",
            LaunchEvent::Goodbye => "goodbye",
        }
    }
}

/// Receiver of lifecycle events.
///
/// Called inline from the launcher; implementations must not block.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &LaunchEvent);
}

/// Sink that keeps every event in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<LaunchEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events seen so far, in emission order.
    pub fn events(&self) -> Vec<LaunchEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of events with the given [`LaunchEvent::name`].
    pub fn count(&self, name: &str) -> usize {
        self.events().iter().filter(|e| e.name() == name).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &LaunchEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.emit(&LaunchEvent::ShutdownStarted);
        sink.emit(&LaunchEvent::TeardownComplete);
        sink.emit(&LaunchEvent::Goodbye);

        assert_eq!(
            sink.events(),
            vec![
                LaunchEvent::ShutdownStarted,
                LaunchEvent::TeardownComplete,
                LaunchEvent::Goodbye
            ]
        );
        assert_eq!(sink.count("goodbye"), 1);
        assert_eq!(sink.count("signal_received"), 0);
    }
}
