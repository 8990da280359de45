//! Process signals that end a `start` run.
//!
//! On unix any of SIGINT, SIGTERM or SIGQUIT stops the launcher; elsewhere
//! only Ctrl-C does. The first one received resolves the future and later
//! ones are ignored, there is no second-signal escalation.

/// Resolve on the first stop signal delivered to the process.
///
/// Fails only when a handler cannot be installed.
#[cfg(unix)]
pub async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;
    let mut quit = signal(SignalKind::quit())?;

    let name = tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
        _ = quit.recv() => "SIGQUIT",
    };
    tracing::debug!(signal = name, "stop signal delivered");
    Ok(())
}

#[cfg(not(unix))]
pub async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await?;
    tracing::debug!(signal = "ctrl-c", "stop signal delivered");
    Ok(())
}
