//! Metrics collection and exposition.
//!
//! # Metrics
//! - `launcher_apps_running` (gauge): apps currently running
//! - `launcher_app_terminations_total` (counter): terminations by app, outcome
//! - `launcher_shutdowns_total` (counter): shutdowns by cause
//!
//! # Design Decisions
//! - Recording is a no-op until an exporter is installed
//! - Prometheus exporter is opt-in via `observability.metrics_enabled`

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter listening on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);

    if let Err(e) = builder.install() {
        tracing::error!(error = %e, "Failed to install Prometheus recorder");
    } else {
        tracing::info!(address = %addr, "Metrics exporter listening");
    }
}

pub fn set_apps_running(count: usize) {
    metrics::gauge!("launcher_apps_running").set(count as f64);
}

pub fn record_app_termination(app: &str, failed: bool) {
    let outcome = if failed { "failure" } else { "clean" };
    metrics::counter!(
        "launcher_app_terminations_total",
        "app" => app.to_string(),
        "outcome" => outcome
    )
    .increment(1);
}

pub fn record_shutdown(cause: &'static str) {
    metrics::counter!("launcher_shutdowns_total", "cause" => cause).increment(1);
}
