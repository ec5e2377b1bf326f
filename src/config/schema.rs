//! Configuration schema for lister
//!
//! Configuration is stored at `~/.config/lister/config.toml`

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Lister defaults
    pub lister: ListerConfig,

    /// Cache settings
    pub cache: CacheConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,

    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            log_format: "text".to_string(),
        }
    }
}

/// Output format for list and get
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}

/// Lister defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListerConfig {
    /// Namespace used when none is given on the command line
    pub default_namespace: String,

    /// Default output format
    pub output: OutputFormat,
}

impl Default for ListerConfig {
    fn default() -> Self {
        Self {
            default_namespace: "default".to_string(),
            output: OutputFormat::Table,
        }
    }
}

/// Cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Snapshot file to seed the cache from
    pub snapshot: Option<PathBuf>,

    /// Maintain the namespace index (disable to force full scans)
    pub namespace_index: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            snapshot: None,
            namespace_index: true,
        }
    }
}
