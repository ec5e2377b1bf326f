//! Read contract of the entity indexer

use crate::error::IndexError;
use crate::resource::Resource;
use std::sync::Arc;

/// Concurrency-safe local cache of entities keyed by composite key
///
/// The indexer is owned and written by whatever keeps it in sync with the
/// remote authority; listers only read through this trait. Implementations
/// must allow these reads to run concurrently with writes.
pub trait Indexer<K: Resource>: Send + Sync {
    /// Exact lookup; `Ok(None)` when no entity is stored under `key`
    fn get_by_key(&self, key: &str) -> Result<Option<Arc<K>>, IndexError>;

    /// Visit every stored entity, in no particular order
    fn for_each(&self, visit: &mut dyn FnMut(&Arc<K>)) -> Result<(), IndexError>;

    /// Visit every entity whose namespace equals `namespace`
    ///
    /// The default scans everything and compares namespaces. Indexers with
    /// a namespace index should override it.
    fn for_each_in_namespace(
        &self,
        namespace: &str,
        visit: &mut dyn FnMut(&Arc<K>),
    ) -> Result<(), IndexError> {
        scan_namespace(self, namespace, visit)
    }
}

/// Full scan keeping only entities stored in `namespace`
pub fn scan_namespace<K, I>(
    indexer: &I,
    namespace: &str,
    visit: &mut dyn FnMut(&Arc<K>),
) -> Result<(), IndexError>
where
    K: Resource,
    I: Indexer<K> + ?Sized,
{
    indexer.for_each(&mut |obj: &Arc<K>| {
        if obj.namespace() == namespace {
            visit(obj);
        }
    })
}
