//! Selector-filtered enumeration over an indexer

use super::indexer::Indexer;
use crate::error::IndexError;
use crate::labels::Selector;
use crate::resource::Resource;
use std::sync::Arc;

/// Append every entity whose labels satisfy `selector`
///
/// The everything-selector skips label evaluation entirely.
pub fn list_all<K, I>(
    indexer: &I,
    selector: &Selector,
    append: &mut dyn FnMut(Arc<K>),
) -> Result<(), IndexError>
where
    K: Resource,
    I: Indexer<K> + ?Sized,
{
    let select_all = selector.is_empty();
    indexer.for_each(&mut |obj: &Arc<K>| {
        if select_all || selector.matches(obj.labels()) {
            append(Arc::clone(obj));
        }
    })
}

/// Append every entity stored in `namespace` whose labels satisfy `selector`
pub fn list_all_by_namespace<K, I>(
    indexer: &I,
    namespace: &str,
    selector: &Selector,
    append: &mut dyn FnMut(Arc<K>),
) -> Result<(), IndexError>
where
    K: Resource,
    I: Indexer<K> + ?Sized,
{
    let select_all = selector.is_empty();
    indexer.for_each_in_namespace(namespace, &mut |obj: &Arc<K>| {
        if select_all || selector.matches(obj.labels()) {
            append(Arc::clone(obj));
        }
    })
}
