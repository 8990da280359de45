//! Launcher lifecycle state machine.
//!
//! # States
//! - Idle: created, nothing started
//! - Launching: apps are being built and spawned
//! - Running: every app has been spawned
//! - ShuttingDown: apps have been told to stop
//! - Terminated: every app stopped (or was aborted after the grace period)
//!
//! # State Transitions
//! ```text
//! Idle → Launching: launch()
//! Launching → Idle: launch() failed before anything was spawned
//! Launching → Running: every app spawned; a close() or app termination
//!   seen while launching is latched and applied right after
//! Running → ShuttingDown: close() or first app termination
//! Idle → Terminated: close() before any launch
//! ShuttingDown → Terminated: wait_for_termination() drained every app
//! ```

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherState {
    Idle,
    Launching,
    Running,
    ShuttingDown,
    Terminated,
}

impl LauncherState {
    /// Whether the state machine allows moving from `self` to `next`.
    pub fn can_transition_to(self, next: LauncherState) -> bool {
        use LauncherState::*;
        matches!(
            (self, next),
            (Idle, Launching)
                | (Launching, Idle)
                | (Launching, Running)
                | (Running, ShuttingDown)
                | (Idle, Terminated)
                | (ShuttingDown, Terminated)
        )
    }
}

impl fmt::Display for LauncherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LauncherState::Idle => "idle",
            LauncherState::Launching => "launching",
            LauncherState::Running => "running",
            LauncherState::ShuttingDown => "shutting down",
            LauncherState::Terminated => "terminated",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::LauncherState::*;

    #[test]
    fn test_forward_path_is_allowed() {
        assert!(Idle.can_transition_to(Launching));
        assert!(Launching.can_transition_to(Running));
        assert!(Running.can_transition_to(ShuttingDown));
        assert!(ShuttingDown.can_transition_to(Terminated));
    }

    #[test]
    fn test_no_going_back() {
        assert!(!Running.can_transition_to(Idle));
        assert!(!ShuttingDown.can_transition_to(Running));
        assert!(!Terminated.can_transition_to(Idle));
        assert!(!Running.can_transition_to(Terminated));
        assert!(!ShuttingDown.can_transition_to(ShuttingDown));
        assert!(!Launching.can_transition_to(ShuttingDown));
    }
}
