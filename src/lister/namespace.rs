//! Namespace-scoped lister

use crate::cache::{list_all_by_namespace, object_key, Indexer};
use crate::error::{ListerError, ListerResult};
use crate::labels::Selector;
use crate::resource::Resource;
use std::sync::Arc;
use tracing::debug;

/// Lists and gets entities of kind `K` within one namespace
pub struct NamespaceLister<K: Resource> {
    indexer: Arc<dyn Indexer<K>>,
    namespace: String,
}

impl<K: Resource> NamespaceLister<K> {
    pub(super) fn new(indexer: Arc<dyn Indexer<K>>, namespace: String) -> Self {
        Self { indexer, namespace }
    }

    /// Namespace this lister is bound to
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// List entities in this namespace whose labels satisfy `selector`
    pub fn list(&self, selector: &Selector) -> ListerResult<Vec<Arc<K>>> {
        let mut ret = Vec::new();
        list_all_by_namespace(
            self.indexer.as_ref(),
            &self.namespace,
            selector,
            &mut |obj: Arc<K>| ret.push(obj),
        )?;
        debug!(
            kind = K::KIND,
            namespace = %self.namespace,
            selector = %selector,
            count = ret.len(),
            "listed in namespace"
        );
        Ok(ret)
    }

    /// Get the entity stored under `namespace/name`
    ///
    /// A missing entity is [`ListerError::NotFound`] carrying the kind and
    /// the bare `name`. An empty name is looked up like any other.
    pub fn get(&self, name: &str) -> ListerResult<Arc<K>> {
        let key = object_key(&self.namespace, name);
        match self.indexer.get_by_key(&key)? {
            Some(obj) => Ok(obj),
            None => {
                debug!(kind = K::KIND, key = %key, "not found");
                Err(ListerError::not_found(K::group_resource(), name))
            }
        }
    }
}

impl<K: Resource> Clone for NamespaceLister<K> {
    fn clone(&self) -> Self {
        Self {
            indexer: Arc::clone(&self.indexer),
            namespace: self.namespace.clone(),
        }
    }
}
