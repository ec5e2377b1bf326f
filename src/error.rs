//! Error types for the lister crate
//!
//! Library and binary share `ListerResult<T>`. Failures raised by an
//! indexer keep their own type, `IndexError`, and pass through listers
//! unchanged inside `ListerError::Index`.

use crate::resource::GroupResource;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lister operations
pub type ListerResult<T> = Result<T, ListerError>;

/// Errors reported by an indexer while enumerating or looking up entries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("index with name {0} does not exist")]
    UnknownIndex(String),

    #[error("indexer conflict: {0}")]
    IndexerConflict(String),

    #[error("cannot add indexers to a store that already holds {0} item(s)")]
    IndexerOnPopulatedStore(usize),

    #[error("indexer internal error: {0}")]
    Internal(String),
}

/// All errors that can occur in the lister
#[derive(Error, Debug)]
pub enum ListerError {
    // Lookup errors
    #[error(transparent)]
    Index(#[from] IndexError),

    #[error("{resource} \"{name}\" not found")]
    NotFound { resource: GroupResource, name: String },

    #[error("Invalid label selector {selector:?}: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Invalid object key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    // Snapshot errors
    #[error("No snapshot configured")]
    SnapshotNotConfigured,

    #[error("Invalid snapshot at {path}: {reason}")]
    SnapshotInvalid { path: PathBuf, reason: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("{0}")]
    User(String),
}

impl ListerError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a not-found error for a resource kind and bare name
    pub fn not_found(resource: GroupResource, name: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            name: name.into(),
        }
    }

    /// Create an invalid selector error
    pub fn invalid_selector(selector: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            reason: reason.into(),
        }
    }

    /// Whether this is the expected "no such entity" outcome of a get
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::SnapshotNotConfigured => {
                Some("Pass --snapshot <file>, set LISTER_SNAPSHOT, or set cache.snapshot in the config")
            }
            Self::InvalidSelector { .. } => {
                Some("Selectors look like: app=web,tier!=db,env in (prod,staging),!legacy")
            }
            Self::NotFound { .. } => Some("Run: lister list -A to see what the snapshot holds"),
            _ => None,
        }
    }
}
