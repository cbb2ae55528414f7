//! ENI daemon entry point.
//!
//! Offline subcommands for inspecting what the daemon would do on a node:
//! the capabilities an instance type supports and the effective
//! configuration.

use anyhow::Context;
use clap::{Parser, Subcommand};
use eni_daemon::capability::detect;
use eni_daemon::config::{load_limits, DEFAULT_CONFIG_PATH};
use eni_daemon::{DaemonConfig, DaemonMode};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Node-local ENI and address pool daemon
#[derive(Parser, Debug)]
#[command(name = "enid")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file
    #[arg(short = 'c', long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error), overridden by RUST_LOG
    #[arg(short = 'l', long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the capabilities left after narrowing the configuration to an
    /// instance type
    Check {
        /// TOML file describing the instance type limits
        #[arg(long)]
        limits: PathBuf,

        /// Networking mode, defaults to the configured one
        #[arg(long)]
        mode: Option<DaemonMode>,
    },

    /// Print the effective configuration
    ShowConfig,
}

fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level {level}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to set logger: {e}"))
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = DaemonConfig::load_or_default(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    config.validate().context("invalid configuration")?;

    match args.command {
        Command::Check { limits, mode } => {
            let limits = load_limits(&limits)
                .with_context(|| format!("loading limits {}", limits.display()))?;
            let mode = mode.unwrap_or(config.mode);
            let capabilities = detect(&limits, mode, &mut config);
            info!(%mode, ?capabilities, "instance checked");
            println!("{}", serde_json::to_string_pretty(&capabilities)?);
        }
        Command::ShowConfig => {
            print!("{}", config.to_toml()?);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = init_logging(&args.log_level) {
        eprintln!("enid: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %format!("{e:#}"), "enid failed");
            ExitCode::FAILURE
        }
    }
}
