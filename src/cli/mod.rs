//! Command-line interface

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};

use crate::cache::Store;
use crate::config::Config;
use crate::error::{ListerError, ListerResult};
use crate::lister::{Lister, TaskLister};
use crate::resource::Task;
use crate::snapshot;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Seed a task cache from the snapshot and wrap it in a lister
///
/// The `--snapshot` flag wins over `cache.snapshot` in the config.
pub fn open_tasks(snapshot_path: Option<&Path>, config: &Config) -> ListerResult<TaskLister> {
    let path = snapshot_path
        .map(Path::to_path_buf)
        .or_else(|| config.cache.snapshot.clone())
        .ok_or(ListerError::SnapshotNotConfigured)?;

    let store: Store<Task> = if config.cache.namespace_index {
        Store::new()
    } else {
        debug!("Namespace index disabled, namespace lists will scan the whole cache");
        Store::without_indexers()
    };
    snapshot::load_into(&store, &path)?;

    Ok(Lister::new(Arc::new(store)))
}
