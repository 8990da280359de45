//! Errors reported by apps.

use thiserror::Error;

/// Why an app stopped with an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// The app returned an error from its run loop.
    #[error("application '{app}' failed: {message}")]
    Failed { app: String, message: String },

    /// The app panicked.
    #[error("application '{app}' panicked: {message}")]
    Panicked { app: String, message: String },

    /// The app did not stop within the grace period and was aborted.
    #[error("application '{app}' did not stop in time and was aborted")]
    Aborted { app: String },

    /// The app could not be constructed.
    #[error("application '{app}' setup failed: {message}")]
    Setup { app: String, message: String },
}

impl AppError {
    pub fn failed(app: impl Into<String>, message: impl ToString) -> Self {
        AppError::Failed {
            app: app.into(),
            message: message.to_string(),
        }
    }

    pub fn setup(app: impl Into<String>, message: impl ToString) -> Self {
        AppError::Setup {
            app: app.into(),
            message: message.to_string(),
        }
    }

    /// Id of the app this error belongs to.
    pub fn app(&self) -> &str {
        match self {
            AppError::Failed { app, .. }
            | AppError::Panicked { app, .. }
            | AppError::Aborted { app }
            | AppError::Setup { app, .. } => app,
        }
    }

    /// Short stable label (snake_case) for logs and metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            AppError::Failed { .. } => "app_failed",
            AppError::Panicked { .. } => "app_panicked",
            AppError::Aborted { .. } => "app_aborted",
            AppError::Setup { .. } => "app_setup",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_label() {
        let err = AppError::failed("merger", "disk full");
        assert_eq!(err.to_string(), "application 'merger' failed: disk full");
        assert_eq!(err.app(), "merger");
        assert_eq!(err.as_label(), "app_failed");
    }
}
