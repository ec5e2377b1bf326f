//! Seed a store from a JSON dump
//!
//! Accepts the shape produced by `kubectl get <kind> -A -o json`
//! (`{"kind": "List", "items": [...]}`), a bare JSON array of entities,
//! or a single entity. Loading replaces the store's contents, the same
//! way a full resync would.

use crate::cache::Store;
use crate::error::{ListerError, ListerResult};
use crate::resource::Resource;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// Parse snapshot content; `path` is only used for error reporting
///
/// Items are decoded one by one so a bad entry is reported by position
/// together with the field-level reason.
pub fn parse<K: DeserializeOwned>(content: &str, path: &Path) -> ListerResult<Vec<K>> {
    let invalid = |reason: String| ListerError::SnapshotInvalid {
        path: path.to_path_buf(),
        reason,
    };

    let document: Value = serde_json::from_str(content).map_err(|e| invalid(e.to_string()))?;

    let items = match document {
        Value::Array(items) => items,
        Value::Object(mut obj) if obj.contains_key("items") => match obj.remove("items") {
            Some(Value::Array(items)) => items,
            _ => return Err(invalid("\"items\" must be an array".to_string())),
        },
        obj @ Value::Object(_) => {
            let single = serde_json::from_value(obj).map_err(|e| invalid(e.to_string()))?;
            return Ok(vec![single]);
        }
        _ => {
            return Err(invalid(
                "expected a List object, an array or a single object".to_string(),
            ))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item).map_err(|e| invalid(format!("item {}: {}", i, e)))
        })
        .collect()
}

/// Read every entity from a snapshot file
pub fn read<K: DeserializeOwned>(path: &Path) -> ListerResult<Vec<K>> {
    let content = fs::read_to_string(path)
        .map_err(|e| ListerError::io(format!("reading snapshot {}", path.display()), e))?;
    parse(&content, path)
}

/// Replace the contents of `store` with a snapshot file, returning the entity count
pub fn load_into<K>(store: &Store<K>, path: &Path) -> ListerResult<usize>
where
    K: Resource + DeserializeOwned,
{
    let items: Vec<K> = read(path)?;
    store.replace(items);
    let count = store.len();
    info!("Loaded {} {} object(s) from {}", count, K::KIND, path.display());
    Ok(count)
}
