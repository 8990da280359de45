//! End-to-end coordinator runs: signal vs. app termination, exit outcome.

use std::future::Future;
use std::time::Duration;

use service_launcher::app::AppError;
use service_launcher::lifecycle::{coordinate, Outcome};
use service_launcher::observability::LaunchEvent;
use service_launcher::LauncherState;

mod common;

use common::{apps, completes_after, fails_after, fails_on_stop, launcher, until_stopped, BOUND};

fn never() -> impl Future<Output = std::io::Result<()>> {
    std::future::pending()
}

fn signal_after(delay: Duration) -> impl Future<Output = std::io::Result<()>> {
    async move {
        tokio::time::sleep(delay).await;
        Ok(())
    }
}

#[tokio::test]
async fn test_single_app_completes_cleanly() {
    let (launcher, sink) = launcher(vec![completes_after("mindreader", Duration::from_millis(20))]);
    launcher.launch(&apps(&["mindreader"])).unwrap();

    let outcome = tokio::time::timeout(BOUND, coordinate(launcher.clone(), never(), sink.as_ref()))
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(sink.count("goodbye"), 1);
    assert!(sink.events().contains(&LaunchEvent::CleanShutdown {
        app: "mindreader".into()
    }));
    assert_eq!(launcher.state(), LauncherState::Terminated);
}

#[tokio::test]
async fn test_failing_app_brings_run_down() {
    let (launcher, sink) = launcher(vec![
        until_stopped("relayer"),
        fails_after("merger", Duration::from_millis(20), "E"),
    ]);
    launcher.launch(&apps(&["relayer", "merger"])).unwrap();

    let outcome = tokio::time::timeout(BOUND, coordinate(launcher.clone(), never(), sink.as_ref()))
        .await
        .unwrap();

    let expected = AppError::failed("merger", "E");
    assert_eq!(outcome, Outcome::Failure(expected.clone()));
    assert!(!outcome.is_success());
    assert_eq!(launcher.err(), Some(expected.clone()));
    assert!(sink.events().contains(&LaunchEvent::UnexpectedShutdown {
        app: "merger".into(),
        error: expected,
    }));
    assert!(sink.events().contains(&LaunchEvent::AppTerminated {
        app: "relayer".into(),
        error: None,
    }));
    assert_eq!(sink.count("goodbye"), 0);
}

#[tokio::test]
async fn test_signal_stops_every_app() {
    let (launcher, sink) = launcher(vec![until_stopped("dashboard"), until_stopped("apiproxy")]);
    launcher.launch(&apps(&["dashboard", "apiproxy"])).unwrap();

    let outcome = tokio::time::timeout(
        BOUND,
        coordinate(launcher.clone(), signal_after(Duration::from_millis(20)), sink.as_ref()),
    )
    .await
    .unwrap();

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(sink.count("signal_received"), 1);
    assert_eq!(sink.count("app_terminated"), 2);
    assert_eq!(sink.count("teardown_complete"), 1);
    assert_eq!(sink.count("goodbye"), 1);
    assert!(launcher.running_apps().is_empty());
}

#[tokio::test]
async fn test_failure_during_signal_shutdown_fails_run() {
    let (launcher, sink) = launcher(vec![
        until_stopped("dashboard"),
        fails_on_stop("apiproxy", "flush failed"),
    ]);
    launcher.launch(&apps(&["dashboard", "apiproxy"])).unwrap();

    let outcome = tokio::time::timeout(
        BOUND,
        coordinate(launcher.clone(), signal_after(Duration::from_millis(10)), sink.as_ref()),
    )
    .await
    .unwrap();

    assert_eq!(
        outcome,
        Outcome::Failure(AppError::failed("apiproxy", "flush failed"))
    );
    assert_eq!(sink.count("goodbye"), 0);
}

#[tokio::test]
async fn test_broken_signal_handler_still_ends_on_termination() {
    let (launcher, sink) = launcher(vec![completes_after("timer", Duration::from_millis(10))]);
    launcher.launch(&apps(&["timer"])).unwrap();

    let broken = async { Err::<(), _>(std::io::Error::other("no signal support")) };
    let outcome = tokio::time::timeout(BOUND, coordinate(launcher, broken, sink.as_ref()))
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(sink.count("signal_received"), 0);
}

#[tokio::test]
async fn test_outside_close_still_waits_for_teardown() {
    let (launcher, sink) = launcher(vec![until_stopped("relayer")]);
    launcher.launch(&apps(&["relayer"])).unwrap();

    let closer = launcher.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(10)).await;
        closer.close();
    });

    let outcome = tokio::time::timeout(BOUND, coordinate(launcher.clone(), never(), sink.as_ref()))
        .await
        .unwrap();
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(launcher.state(), LauncherState::Terminated);
}
