//! Launch errors.

use thiserror::Error;

use crate::app::AppError;
use crate::launcher::state::LauncherState;

/// Why `Launcher::launch` refused to start the app set.
///
/// Nothing has been spawned when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    #[error("unknown application '{0}'")]
    UnknownApp(String),

    #[error("unable to set up application '{app}': {source}")]
    Setup {
        app: String,
        #[source]
        source: AppError,
    },

    #[error("no application to launch")]
    EmptyAppSet,

    #[error("launcher is {0}, expected idle")]
    InvalidState(LauncherState),
}
