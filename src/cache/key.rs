//! Composite object keys
//!
//! Every entity is stored under `namespace + "/" + name`. The separator
//! is always present, so cluster-scoped entities live under `"/name"`.

use crate::error::{ListerError, ListerResult};
use crate::resource::Resource;

/// Key separator between namespace and name
pub const SEPARATOR: char = '/';

/// Build the composite key for `namespace/name`
pub fn object_key(namespace: &str, name: &str) -> String {
    format!("{}{}{}", namespace, SEPARATOR, name)
}

/// Composite key of an entity, derived from its metadata
pub fn key_for<K: Resource>(obj: &K) -> String {
    object_key(obj.namespace(), obj.name())
}

/// Split a user-supplied `namespace/name` or bare `name` reference
///
/// A bare name returns `None` for the namespace.
pub fn split_key(key: &str) -> ListerResult<(Option<&str>, &str)> {
    let mut parts = key.split(SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), None, None) => Ok((None, name)),
        (Some(namespace), Some(name), None) => Ok((Some(namespace), name)),
        _ => Err(ListerError::InvalidKey {
            key: key.to_string(),
            reason: format!("expected at most one '{}'", SEPARATOR),
        }),
    }
}
