//! Read-only listers over an entity indexer
//!
//! A [`Lister`] answers "list everything matching a selector" across the
//! whole indexer and hands out [`NamespaceLister`]s that scope list and
//! get to one namespace. Neither holds state beyond the shared indexer
//! reference and, for the scoped lister, the namespace it was created
//! for. Every call is a single synchronous read against the cache, so
//! results are only as fresh as the last sync.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use lister::cache::Store;
//! use lister::labels::Selector;
//! use lister::lister::Lister;
//! use lister::resource::Task;
//!
//! let store = Arc::new(Store::new());
//! store.add(Task::new("ci", "build").with_label("app", "web"));
//!
//! let tasks: Lister<Task> = Lister::new(store);
//! assert_eq!(tasks.list(&Selector::everything()).unwrap().len(), 1);
//!
//! let build = tasks.for_namespace("ci").get("build").unwrap();
//! assert_eq!(build.metadata.name, "build");
//! assert!(tasks.for_namespace("ci").get("deploy").unwrap_err().is_not_found());
//! ```

mod namespace;

pub use namespace::NamespaceLister;

use crate::cache::{list_all, Indexer};
use crate::error::ListerResult;
use crate::labels::Selector;
use crate::resource::{Resource, Task};
use std::sync::Arc;
use tracing::debug;

/// Lister for [`Task`]s
pub type TaskLister = Lister<Task>;

/// Namespace-scoped lister for [`Task`]s
pub type TaskNamespaceLister = NamespaceLister<Task>;

/// Lists entities of kind `K` across every namespace
pub struct Lister<K: Resource> {
    indexer: Arc<dyn Indexer<K>>,
}

impl<K: Resource> Lister<K> {
    /// Wrap a shared indexer
    pub fn new(indexer: Arc<dyn Indexer<K>>) -> Self {
        Self { indexer }
    }

    /// List every entity whose labels satisfy `selector`
    ///
    /// Order is unspecified. No matches is an empty vector, not an error.
    pub fn list(&self, selector: &Selector) -> ListerResult<Vec<Arc<K>>> {
        let mut ret = Vec::new();
        list_all(self.indexer.as_ref(), selector, &mut |obj: Arc<K>| ret.push(obj))?;
        debug!(kind = K::KIND, selector = %selector, count = ret.len(), "listed");
        Ok(ret)
    }

    /// Lister scoped to `namespace`
    ///
    /// The namespace is not validated; an empty namespace scopes to
    /// cluster-scoped entities.
    pub fn for_namespace(&self, namespace: impl Into<String>) -> NamespaceLister<K> {
        NamespaceLister::new(Arc::clone(&self.indexer), namespace.into())
    }
}

impl<K: Resource> Clone for Lister<K> {
    fn clone(&self) -> Self {
        Self {
            indexer: Arc::clone(&self.indexer),
        }
    }
}
