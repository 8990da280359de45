use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use service_launcher::apps::builtin_registry;
use service_launcher::cli::{Cli, Commands};
use service_launcher::config::loader::load_or_default;
use service_launcher::lifecycle::{run_start, wait_for_shutdown_signal, StartOptions};
use service_launcher::observability::{init_logging, EventSink, TracingSink};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_or_default(cli.config_file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_logging(cli.log_level.as_deref().unwrap_or("info"));
            tracing::error!(error = %e, "Error reading config file");
            return ExitCode::FAILURE;
        }
    };

    init_logging(
        cli.log_level
            .as_deref()
            .unwrap_or(&config.observability.log_level),
    );

    let registry = match builtin_registry() {
        Ok(registry) => registry,
        Err(e) => {
            tracing::error!(error = %e, "Application registry is not configured correctly");
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::Apps => {
            for descriptor in registry.descriptors() {
                println!("{:<12} {:<12} {}", descriptor.id, descriptor.title, descriptor.description);
            }
            ExitCode::SUCCESS
        }
        Commands::Start { apps, flags } => {
            let options = StartOptions {
                config_file: cli.config_file,
                data_dir: cli.data_dir,
                mesh_dsn: cli.mesh_dsn,
                apps,
                flags,
            };
            let sink: Arc<dyn EventSink> = Arc::new(TracingSink);

            match run_start(config, options, registry, sink, wait_for_shutdown_signal()).await {
                Ok(outcome) => outcome.exit_code(),
                Err(e) => {
                    tracing::error!(error = %e, "Unable to start");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
