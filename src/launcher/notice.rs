//! Termination notice: which app brought the run down, and why.

use crate::app::AppError;

/// Delivered at most once per run, for the first app to terminate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminationNotice {
    /// Id of the app that terminated first.
    pub app: String,
    /// `None` when the app stopped cleanly on its own.
    pub error: Option<AppError>,
}

impl TerminationNotice {
    pub fn is_clean(&self) -> bool {
        self.error.is_none()
    }
}
