//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "service-launcher")]
#[command(about = "Starts a set of named services and supervises them until shutdown", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML configuration file; defaults are used when omitted
    #[arg(short, long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Overrides `global.data_dir`
    #[arg(short, long, global = true)]
    pub data_dir: Option<String>,

    /// Overrides `global.mesh_dsn`
    #[arg(long, global = true)]
    pub mesh_dsn: Option<String>,

    /// Overrides `observability.log_level`
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start services all at once (from arguments, or `start.args` in the config)
    Start {
        /// App ids, space or comma separated
        apps: Vec<String>,

        /// App flag override, `key=value`; repeatable
        #[arg(long = "flag", value_parser = parse_flag)]
        flags: Vec<(String, String)>,
    },
    /// List the registered apps
    Apps,
}

fn parse_flag(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty flag name in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
