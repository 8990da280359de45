//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Render [`LaunchEvent`]s as structured log lines
//!
//! # Design Decisions
//! - `RUST_LOG` takes precedence over the configured level
//! - One log line per event, event name carried as a field

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::observability::events::{EventSink, LaunchEvent};

/// Install the global tracing subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("service_launcher={level},{level}").into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Sink that writes every event through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: &LaunchEvent) {
        let name = event.name();
        match event {
            LaunchEvent::Starting {
                config_file,
                data_dir,
            } => {
                tracing::info!(event = name, config_file = ?config_file, data_dir = %data_dir, "Starting launcher");
            }
            LaunchEvent::Launching { apps } => {
                tracing::info!(event = name, apps = %apps.join(","), "Launching applications");
            }
            LaunchEvent::AppStarted { app } => {
                tracing::debug!(event = name, app = %app, "Application started");
            }
            LaunchEvent::AppTerminated { app, error: None } => {
                tracing::info!(event = name, app = %app, "Application stopped");
            }
            LaunchEvent::AppTerminated {
                app,
                error: Some(error),
            } => {
                tracing::warn!(event = name, app = %app, error = %error, "Application stopped with error");
            }
            LaunchEvent::SignalReceived => {
                tracing::info!(event = name, "Received termination signal, quitting");
            }
            LaunchEvent::CleanShutdown { app } => {
                tracing::info!(event = name, app = %app, "Application triggered a clean shutdown, quitting");
            }
            LaunchEvent::UnexpectedShutdown { app, error } => {
                tracing::error!(event = name, app = %app, error = %error, "Application shutdown unexpectedly, quitting");
            }
            LaunchEvent::ShutdownStarted => {
                tracing::info!(event = name, "Stopping all applications");
            }
            LaunchEvent::TeardownComplete => {
                tracing::info!(event = name, "All applications stopped");
            }
            LaunchEvent::GraceExceeded { stuck } => {
                tracing::warn!(event = name, stuck = %stuck.join(","), "Grace period exceeded, aborting applications");
            }
            LaunchEvent::Goodbye => {
                tracing::info!(event = name, "Goodbye");
            }
        }
    }
}
