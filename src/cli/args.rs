//! CLI argument definitions using clap derive

use crate::config::OutputFormat;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// lister - query a local snapshot of cached tasks
///
/// Lists and gets entities from an in-memory cache seeded from a JSON
/// snapshot, without contacting the remote API.
#[derive(Parser, Debug)]
#[command(name = "lister")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "LISTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Snapshot file to seed the cache from
    #[arg(short, long, global = true, env = "LISTER_SNAPSHOT")]
    pub snapshot: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List tasks matching a label selector
    List(ListArgs),

    /// Get one task by name
    Get(GetArgs),

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Namespace to list (defaults to lister.default_namespace)
    #[arg(short, long, conflicts_with = "all_namespaces")]
    pub namespace: Option<String>,

    /// List across all namespaces
    #[arg(short = 'A', long)]
    pub all_namespaces: bool,

    /// Label selector, e.g. "app=web,tier!=db"
    #[arg(short = 'l', long)]
    pub selector: Option<String>,

    /// Output format (defaults to lister.output)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the get command
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Task name, or namespace/name
    pub name: String,

    /// Namespace to look in (defaults to lister.default_namespace)
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Output format (defaults to lister.output)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Config action
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
