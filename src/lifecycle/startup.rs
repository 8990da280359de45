//! Startup orchestration for the `start` command.
//!
//! # Responsibilities
//! - Apply command-line overrides on top of the loaded configuration
//! - Resolve and create the data directory
//! - Construct shared runtime modules (search mesh client)
//! - Validate the registry and resolve the app set
//! - Launch, print the welcome message, hand over to the coordinator
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Nothing is spawned before every check above passed

use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::config::LauncherConfig;
use crate::config::WelcomeConfig;
use crate::launcher::{LaunchError, Launcher};
use crate::lifecycle::coordinator::{coordinate, Outcome};
use crate::modules::{MeshError, RuntimeModules};
use crate::observability::events::{EventSink, LaunchEvent};
use crate::observability::metrics;
use crate::registry::{AppRegistry, AppSet, RegistryError};

/// Setup failures of the `start` command. Nothing is running when one is returned.
#[derive(Debug, Error)]
pub enum StartError {
    #[error("unable to set up data directory '{path}': {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to create search mesh client: {0}")]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("unable to launch: {0}")]
    Launch(#[from] LaunchError),
}

/// Command-line input of the `start` command.
#[derive(Debug, Clone, Default)]
pub struct StartOptions {
    /// Path the configuration was read from, for logging only.
    pub config_file: Option<PathBuf>,
    /// Overrides `global.data_dir`.
    pub data_dir: Option<String>,
    /// Overrides `global.mesh_dsn`.
    pub mesh_dsn: Option<String>,
    /// Apps to start; `start.args` is used when empty.
    pub apps: Vec<String>,
    /// `key=value` overrides applied on top of `start.flags`.
    pub flags: Vec<(String, String)>,
}

/// Run the `start` command until every app has stopped.
pub async fn run_start<S>(
    mut config: LauncherConfig,
    options: StartOptions,
    registry: AppRegistry,
    sink: Arc<dyn EventSink>,
    signal: S,
) -> Result<Outcome, StartError>
where
    S: Future<Output = std::io::Result<()>>,
{
    apply_overrides(&mut config, &options);

    let data_dir = absolute(Path::new(&config.global.data_dir)).map_err(|source| {
        StartError::DataDir {
            path: PathBuf::from(&config.global.data_dir),
            source,
        }
    })?;
    std::fs::create_dir_all(&data_dir).map_err(|source| StartError::DataDir {
        path: data_dir.clone(),
        source,
    })?;
    config.global.data_dir = data_dir.display().to_string();

    sink.emit(&LaunchEvent::Starting {
        config_file: options.config_file.as_ref().map(|p| p.display().to_string()),
        data_dir: config.global.data_dir.clone(),
    });

    let modules = RuntimeModules::from_mesh_dsn(&config.global.mesh_dsn)?;
    registry.validate()?;

    let apps = AppSet::resolve(&options.apps, &config.start.args)?;

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let welcome = welcome_message(&apps, &config.welcome);
    let config = Arc::new(config);
    let launcher = Arc::new(Launcher::new(
        config,
        modules,
        Arc::new(registry),
        Arc::clone(&sink),
    ));
    tracing::debug!(run_id = %launcher.run_id(), "launcher created");

    launcher.launch(&apps)?;

    if let Some(message) = welcome {
        println!("{message}");
    }

    Ok(coordinate(launcher, signal, sink.as_ref()).await)
}

fn apply_overrides(config: &mut LauncherConfig, options: &StartOptions) {
    if let Some(dir) = &options.data_dir {
        config.global.data_dir = dir.clone();
    }
    if let Some(dsn) = &options.mesh_dsn {
        config.global.mesh_dsn = dsn.clone();
    }
    for (key, value) in &options.flags {
        config.start.flags.insert(key.clone(), value.clone());
    }
}

fn absolute(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

/// Links to print once the dashboard or the API proxy is part of the run.
pub fn welcome_message(apps: &AppSet, welcome: &WelcomeConfig) -> Option<String> {
    let has_dashboard = apps.contains("dashboard");
    let has_apiproxy = apps.contains("apiproxy");
    if !has_dashboard && !has_apiproxy {
        return None;
    }

    let mut message =
        String::from("Your instance should be ready in a few seconds, here some relevant links:\n");
    if has_dashboard {
        message.push_str(&format!(
            "\n  Dashboard:        http://localhost{}\n",
            welcome.dashboard_addr
        ));
    }
    if has_apiproxy {
        message.push_str(&format!(
            "\n  Explorer & APIs:  http://localhost{addr}\n  GraphiQL:         http://localhost{addr}/graphiql\n",
            addr = welcome.apiproxy_addr
        ));
    }
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn test_no_welcome_for_advanced_usage() {
        let apps = AppSet::resolve(&["relayer", "merger"], &NONE).unwrap();
        assert_eq!(welcome_message(&apps, &WelcomeConfig::default()), None);
    }

    #[test]
    fn test_welcome_lists_dashboard_and_apiproxy() {
        let apps = AppSet::resolve(&["dashboard", "apiproxy"], &NONE).unwrap();
        let message = welcome_message(&apps, &WelcomeConfig::default()).unwrap();
        assert!(message.contains("Dashboard:        http://localhost:8081"));
        assert!(message.contains("GraphiQL:         http://localhost:8080/graphiql"));
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut config = LauncherConfig::default();
        config.start.flags.insert("timer-duration-ms".into(), "5000".into());
        let options = StartOptions {
            data_dir: Some("/tmp/elsewhere".into()),
            flags: vec![("timer-duration-ms".into(), "10".into())],
            ..Default::default()
        };

        apply_overrides(&mut config, &options);
        assert_eq!(config.global.data_dir, "/tmp/elsewhere");
        assert_eq!(config.start.flags["timer-duration-ms"], "10");
    }
}
