//! Launcher: starts the app set and drives it to termination.
//!
//! # Responsibilities
//! - Build every app of the set before spawning any (fail fast, nothing half-started)
//! - Spawn each app with its own stop listener and a monitor task
//! - Deliver the termination notice of the first app to stop
//! - Stop every other app once shutdown begins
//! - Bound teardown by the configured grace period

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::{AbortHandle, JoinError, JoinSet};
use tracing::Instrument;
use uuid::Uuid;

use crate::app::{App, AppContext, AppError};
use crate::config::LauncherConfig;
use crate::launcher::error::LaunchError;
use crate::launcher::notice::TerminationNotice;
use crate::launcher::state::LauncherState;
use crate::lifecycle::shutdown::Shutdown;
use crate::modules::RuntimeModules;
use crate::observability::events::{EventSink, LaunchEvent};
use crate::observability::metrics;
use crate::registry::{AppRegistry, AppSet};

/// Extra time given to aborted apps to unwind before their monitors are dropped.
const ABORT_SETTLE: Duration = Duration::from_secs(1);

/// Floor for the teardown cap taken from configuration.
const MIN_GRACE: Duration = Duration::from_secs(1);

/// Owns the lifecycle of the active app set.
pub struct Launcher {
    config: Arc<LauncherConfig>,
    modules: RuntimeModules,
    registry: Arc<AppRegistry>,
    grace: Duration,
    run_id: Uuid,
    shared: Arc<Shared>,
    notice_rx: Mutex<Option<oneshot::Receiver<TerminationNotice>>>,
}

/// State reachable from the monitor tasks.
struct Shared {
    inner: Mutex<Inner>,
    sink: Arc<dyn EventSink>,
    shutdown: Shutdown,
}

struct Inner {
    state: LauncherState,
    /// A shutdown request arrived while launching; applied once launch settles.
    close_requested: bool,
    notice_tx: Option<oneshot::Sender<TerminationNotice>>,
    err: Option<AppError>,
    running: BTreeSet<String>,
    monitors: Option<JoinSet<()>>,
    aborts: Vec<(String, AbortHandle)>,
}

/// What the caller must do after a state change, outside the lock.
enum ShutdownAction {
    Nothing,
    /// Apps are running: announce and signal them to stop.
    Begin(&'static str),
    /// Nothing was ever started: just release waiters.
    Finish,
}

impl Inner {
    fn transition(&mut self, next: LauncherState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid launcher transition {} -> {}",
            self.state,
            next
        );
        self.state = next;
    }

    fn request_shutdown(&mut self, cause: &'static str) -> ShutdownAction {
        match self.state {
            LauncherState::Idle => {
                self.notice_tx = None;
                self.transition(LauncherState::Terminated);
                ShutdownAction::Finish
            }
            LauncherState::Launching => {
                self.close_requested = true;
                ShutdownAction::Nothing
            }
            LauncherState::Running => {
                self.transition(LauncherState::ShuttingDown);
                ShutdownAction::Begin(cause)
            }
            LauncherState::ShuttingDown | LauncherState::Terminated => ShutdownAction::Nothing,
        }
    }

    /// An app stopping now is the cause of the shutdown.
    fn accepts_notice(&self) -> bool {
        matches!(self.state, LauncherState::Launching | LauncherState::Running)
            && !self.close_requested
    }
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn apply(&self, action: ShutdownAction) {
        match action {
            ShutdownAction::Nothing => {}
            ShutdownAction::Begin(cause) => {
                metrics::record_shutdown(cause);
                self.sink.emit(&LaunchEvent::ShutdownStarted);
                self.shutdown.trigger();
            }
            ShutdownAction::Finish => {
                self.shutdown.trigger();
            }
        }
    }

    fn record_termination(&self, app: &str, result: Result<(), AppError>) {
        let error = result.err();
        metrics::record_app_termination(app, error.is_some());
        self.sink.emit(&LaunchEvent::AppTerminated {
            app: app.to_string(),
            error: error.clone(),
        });

        let action = {
            let mut inner = self.lock();
            inner.running.remove(app);
            metrics::set_apps_running(inner.running.len());

            if let Some(e) = &error {
                if inner.err.is_none() {
                    inner.err = Some(e.clone());
                }
            }

            if inner.accepts_notice() {
                if let Some(tx) = inner.notice_tx.take() {
                    let _ = tx.send(TerminationNotice {
                        app: app.to_string(),
                        error: error.clone(),
                    });
                }
            }

            let cause = if error.is_some() { "app_failure" } else { "app_clean" };
            inner.request_shutdown(cause)
        };
        self.apply(action);
    }
}

impl Launcher {
    /// Create an idle launcher.
    ///
    /// The teardown cap is `shutdown.grace_secs`, never less than one second.
    pub fn new(
        config: Arc<LauncherConfig>,
        modules: RuntimeModules,
        registry: Arc<AppRegistry>,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        let grace = Duration::from_secs(config.shutdown.grace_secs).max(MIN_GRACE);
        let (notice_tx, notice_rx) = oneshot::channel();

        let shared = Arc::new(Shared {
            inner: Mutex::new(Inner {
                state: LauncherState::Idle,
                close_requested: false,
                notice_tx: Some(notice_tx),
                err: None,
                running: BTreeSet::new(),
                monitors: None,
                aborts: Vec::new(),
            }),
            sink,
            shutdown: Shutdown::new(),
        });

        Self {
            config,
            modules,
            registry,
            grace,
            run_id: Uuid::new_v4(),
            shared,
            notice_rx: Mutex::new(Some(notice_rx)),
        }
    }

    /// Override the teardown cap taken from `shutdown.grace_secs`, unclamped.
    pub fn with_grace(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }

    /// Build and spawn every app of `apps`.
    ///
    /// Returns once all apps are spawned; they run in the background. On
    /// error nothing has been spawned and the launcher is back to idle.
    /// Must be called from within a Tokio runtime.
    pub fn launch(&self, apps: &AppSet) -> Result<(), LaunchError> {
        let span = tracing::info_span!("launch", run_id = %self.run_id);
        let _guard = span.enter();

        if apps.is_empty() {
            return Err(LaunchError::EmptyAppSet);
        }

        {
            let mut inner = self.shared.lock();
            if inner.state != LauncherState::Idle {
                return Err(LaunchError::InvalidState(inner.state));
            }
            inner.transition(LauncherState::Launching);
        }

        let built = match self.build_apps(apps) {
            Ok(built) => built,
            Err(e) => {
                self.abandon_launch();
                return Err(e);
            }
        };

        self.shared.sink.emit(&LaunchEvent::Launching {
            apps: apps.to_vec(),
        });

        let mut monitors = JoinSet::new();
        let mut aborts = Vec::with_capacity(built.len());
        for (id, ctx, app) in built {
            self.spawn_app(&mut monitors, &mut aborts, id, ctx, app);
        }

        let action = {
            let mut inner = self.shared.lock();
            inner.monitors = Some(monitors);
            inner.aborts = aborts;
            inner.transition(LauncherState::Running);
            if inner.close_requested {
                inner.request_shutdown("close")
            } else {
                ShutdownAction::Nothing
            }
        };
        self.shared.apply(action);

        tracing::debug!(apps = %apps, "launcher running");
        Ok(())
    }

    fn build_apps(
        &self,
        apps: &AppSet,
    ) -> Result<Vec<(String, AppContext, Box<dyn App>)>, LaunchError> {
        // Unknown ids are reported before any factory runs.
        if let Some(unknown) = apps.iter().find(|id| !self.registry.contains(id)) {
            return Err(LaunchError::UnknownApp(unknown.to_string()));
        }

        apps.iter()
            .map(|id| {
                let descriptor = self
                    .registry
                    .get(id)
                    .ok_or_else(|| LaunchError::UnknownApp(id.to_string()))?;
                let ctx = AppContext::new(id, Arc::clone(&self.config), self.modules.clone());
                let app = descriptor.build(&ctx).map_err(|source| LaunchError::Setup {
                    app: id.to_string(),
                    source,
                })?;
                Ok((id.to_string(), ctx, app))
            })
            .collect()
    }

    fn abandon_launch(&self) {
        let action = {
            let mut inner = self.shared.lock();
            inner.transition(LauncherState::Idle);
            if inner.close_requested {
                inner.close_requested = false;
                inner.request_shutdown("close")
            } else {
                ShutdownAction::Nothing
            }
        };
        self.shared.apply(action);
    }

    fn spawn_app(
        &self,
        monitors: &mut JoinSet<()>,
        aborts: &mut Vec<(String, AbortHandle)>,
        id: String,
        ctx: AppContext,
        app: Box<dyn App>,
    ) {
        let stop = self.shared.shutdown.subscribe();
        {
            let mut inner = self.shared.lock();
            inner.running.insert(id.clone());
            metrics::set_apps_running(inner.running.len());
        }
        self.shared
            .sink
            .emit(&LaunchEvent::AppStarted { app: id.clone() });

        let span = tracing::info_span!("app", app = %id, run_id = %self.run_id);
        let handle = tokio::spawn(app.run(ctx, stop).instrument(span));
        aborts.push((id.clone(), handle.abort_handle()));

        let shared = Arc::clone(&self.shared);
        monitors.spawn(async move {
            let result = match handle.await {
                Ok(result) => result,
                Err(e) => Err(join_error(&id, e)),
            };
            shared.record_termination(&id, result);
        });
    }

    /// Take the single-fire termination notice receiver.
    ///
    /// Returns `None` on every call after the first. The receiver errors out
    /// instead of yielding a notice when the launcher is closed explicitly.
    pub fn terminating(&self) -> Option<oneshot::Receiver<TerminationNotice>> {
        self.notice_rx
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }

    /// First error recorded during the run, if any.
    pub fn err(&self) -> Option<AppError> {
        self.shared.lock().err.clone()
    }

    /// Ask every app to stop. Idempotent and safe to race with app termination.
    pub fn close(&self) {
        let action = {
            let mut inner = self.shared.lock();
            inner.notice_tx = None;
            inner.request_shutdown("close")
        };
        self.shared.apply(action);
    }

    /// Block until every app has stopped.
    ///
    /// Returns once shutdown has begun (by `close` or by an app terminating)
    /// and every app confirmed it stopped, or the grace period ran out and the
    /// remaining apps were aborted. Call it once per run.
    pub async fn wait_for_termination(&self) {
        let mut stop = self.shared.shutdown.subscribe();
        stop.recv().await;

        let (monitors, aborts) = {
            let mut inner = self.shared.lock();
            (inner.monitors.take(), std::mem::take(&mut inner.aborts))
        };

        if let Some(mut monitors) = monitors {
            if tokio::time::timeout(self.grace, drain(&mut monitors))
                .await
                .is_err()
            {
                self.abort_stuck(&mut monitors, &aborts).await;
            }
        }

        let finished = {
            let mut inner = self.shared.lock();
            if inner.state == LauncherState::ShuttingDown {
                inner.transition(LauncherState::Terminated);
                true
            } else {
                false
            }
        };
        if finished {
            self.shared.sink.emit(&LaunchEvent::TeardownComplete);
        }
    }

    async fn abort_stuck(&self, monitors: &mut JoinSet<()>, aborts: &[(String, AbortHandle)]) {
        let stuck = self.running_apps();
        self.shared.sink.emit(&LaunchEvent::GraceExceeded {
            stuck: stuck.clone(),
        });

        {
            let mut inner = self.shared.lock();
            if inner.err.is_none() {
                inner.err = stuck.first().map(|app| AppError::Aborted { app: app.clone() });
            }
        }

        for (id, handle) in aborts {
            if stuck.contains(id) {
                handle.abort();
            }
        }

        if tokio::time::timeout(ABORT_SETTLE, drain(monitors))
            .await
            .is_err()
        {
            tracing::warn!(run_id = %self.run_id, "aborted applications did not unwind, detaching");
            monitors.abort_all();
        }
    }

    pub fn state(&self) -> LauncherState {
        self.shared.lock().state
    }

    /// Ids of the apps still running, sorted.
    pub fn running_apps(&self) -> Vec<String> {
        self.shared.lock().running.iter().cloned().collect()
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }
}

async fn drain(set: &mut JoinSet<()>) {
    while set.join_next().await.is_some() {}
}

fn join_error(app: &str, err: JoinError) -> AppError {
    if err.is_panic() {
        let payload = err.into_panic();
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        AppError::Panicked {
            app: app.to_string(),
            message,
        }
    } else {
        AppError::Aborted {
            app: app.to_string(),
        }
    }
}
