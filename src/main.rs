//! Lister - query a local snapshot of cached tasks
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use lister::cli::{Cli, Commands};
use lister::config::{Config, ConfigManager};
use lister::error::ListerResult;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> ListerResult<()> {
    let cli = Cli::parse();

    let manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = manager.load()?;

    init_logging(cli.verbose, &config);
    debug!("Using config at {}", manager.path().display());

    // Dispatch to command
    match cli.command {
        Commands::Config(args) => lister::cli::commands::config(args, &manager, &config),
        Commands::List(args) => {
            let tasks = lister::cli::open_tasks(cli.snapshot.as_deref(), &config)?;
            lister::cli::commands::list(args, &tasks, &config)
        }
        Commands::Get(args) => {
            let tasks = lister::cli::open_tasks(cli.snapshot.as_deref(), &config)?;
            lister::cli::commands::get(args, &tasks, &config)
        }
    }
}

/// RUST_LOG wins; otherwise 0 = warn, 1 = info, 2+ = debug
fn init_logging(verbose: u8, config: &Config) {
    let level = match verbose {
        0 if config.general.verbose => "info",
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lister={}", level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.without_time().init();
    }
}
