//! App descriptors: what an app is called and how to build it.

use std::sync::Arc;

use crate::app::{App, AppContext, AppError};

/// Builds an app instance for one run.
pub type AppFactory = Arc<dyn Fn(&AppContext) -> Result<Box<dyn App>, AppError> + Send + Sync>;

/// Registration entry for an app.
#[derive(Clone)]
pub struct AppDescriptor {
    /// Unique id used on the command line and in `start.args`.
    pub id: String,
    /// Short human-readable name.
    pub title: String,
    pub description: String,
    pub factory: AppFactory,
}

impl AppDescriptor {
    pub fn new<F>(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        factory: F,
    ) -> Self
    where
        F: Fn(&AppContext) -> Result<Box<dyn App>, AppError> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            factory: Arc::new(factory),
        }
    }

    pub fn build(&self, ctx: &AppContext) -> Result<Box<dyn App>, AppError> {
        (self.factory)(ctx)
    }
}

impl std::fmt::Debug for AppDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppDescriptor")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}
