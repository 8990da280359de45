//! Shared utilities for integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use service_launcher::config::LauncherConfig;
use service_launcher::modules::RuntimeModules;
use service_launcher::observability::RecordingSink;
use service_launcher::{AppDescriptor, AppError, AppRegistry, AppSet, FnApp, Launcher};

/// Upper bound for any wait in these tests.
pub const BOUND: Duration = Duration::from_secs(5);

/// App that runs until the launcher stops it.
pub fn until_stopped(id: &str) -> AppDescriptor {
    AppDescriptor::new(id, id, "runs until stopped", |_ctx| {
        Ok(FnApp::boxed(|_ctx, mut stop| async move {
            stop.recv().await;
            Ok(())
        }))
    })
}

/// App that completes cleanly after `delay`.
pub fn completes_after(id: &str, delay: Duration) -> AppDescriptor {
    AppDescriptor::new(id, id, "completes on its own", move |_ctx| {
        Ok(FnApp::boxed(move |_ctx, _stop| async move {
            tokio::time::sleep(delay).await;
            Ok(())
        }))
    })
}

/// App that fails with `message` after `delay`, unless stopped first.
pub fn fails_after(id: &str, delay: Duration, message: &'static str) -> AppDescriptor {
    AppDescriptor::new(id, id, "fails on its own", move |_ctx| {
        Ok(FnApp::boxed(move |ctx, mut stop| async move {
            tokio::select! {
                _ = tokio::time::sleep(delay) => Err(AppError::failed(ctx.id(), message)),
                _ = stop.recv() => Ok(()),
            }
        }))
    })
}

/// App that fails with `message` only once asked to stop.
pub fn fails_on_stop(id: &str, message: &'static str) -> AppDescriptor {
    AppDescriptor::new(id, id, "fails while stopping", move |_ctx| {
        Ok(FnApp::boxed(move |ctx, mut stop| async move {
            stop.recv().await;
            Err(AppError::failed(ctx.id(), message))
        }))
    })
}

/// App whose run loop records that it was started.
pub fn tracked(id: &str, started: Arc<AtomicBool>) -> AppDescriptor {
    AppDescriptor::new(id, id, "tracks start", move |_ctx| {
        let started = Arc::clone(&started);
        Ok(FnApp::boxed(move |_ctx, mut stop| async move {
            started.store(true, Ordering::SeqCst);
            stop.recv().await;
            Ok(())
        }))
    })
}

pub fn registry(descriptors: Vec<AppDescriptor>) -> AppRegistry {
    let mut registry = AppRegistry::new();
    for descriptor in descriptors {
        registry.register(descriptor).unwrap();
    }
    registry
}

pub fn launcher(descriptors: Vec<AppDescriptor>) -> (Arc<Launcher>, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let launcher = Launcher::new(
        Arc::new(LauncherConfig::default()),
        RuntimeModules::default(),
        Arc::new(registry(descriptors)),
        sink.clone(),
    );
    (Arc::new(launcher), sink)
}

pub fn apps(ids: &[&str]) -> AppSet {
    AppSet::resolve(ids, &[] as &[&str]).unwrap()
}
