//! Thread-safe in-memory store with secondary indices
//!
//! Reference [`Indexer`] implementation. Entities are held behind `Arc`
//! so reads hand out cheap snapshots while the synchronization side keeps
//! writing. Named index functions map each entity to zero or more index
//! values; the store keeps `index -> value -> keys` up to date on every
//! write.

use super::indexer::{scan_namespace, Indexer};
use super::key::key_for;
use crate::error::IndexError;
use crate::resource::Resource;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace};

/// Name of the built-in namespace index
pub const NAMESPACE_INDEX: &str = "namespace";

/// Computes the index values of an entity
pub type IndexFunc<K> = fn(&K) -> Vec<String>;

/// Index functions by index name
pub type Indexers<K> = HashMap<String, IndexFunc<K>>;

/// Indexes an entity by its namespace
pub fn namespace_index_func<K: Resource>(obj: &K) -> Vec<String> {
    vec![obj.namespace().to_string()]
}

/// Index value -> keys of entities producing it
type Index = HashMap<String, HashSet<String>>;

struct Inner<K> {
    items: HashMap<String, Arc<K>>,
    indexers: Indexers<K>,
    indices: HashMap<String, Index>,
}

impl<K: Resource> Inner<K> {
    fn update_indices(&mut self, key: &str, old: Option<&K>, new: Option<&K>) {
        for (name, index_func) in &self.indexers {
            let index = self.indices.entry(name.clone()).or_default();

            if let Some(old) = old {
                for value in index_func(old) {
                    if let Some(keys) = index.get_mut(&value) {
                        keys.remove(key);
                        if keys.is_empty() {
                            index.remove(&value);
                        }
                    }
                }
            }

            if let Some(new) = new {
                for value in index_func(new) {
                    index.entry(value).or_default().insert(key.to_string());
                }
            }
        }
    }

    fn index(&self, index_name: &str) -> Result<&Index, IndexError> {
        if !self.indexers.contains_key(index_name) {
            return Err(IndexError::UnknownIndex(index_name.to_string()));
        }
        Ok(self.indices.get(index_name).unwrap_or(&EMPTY_INDEX))
    }
}

static EMPTY_INDEX: LazyLock<Index> = LazyLock::new(HashMap::new);

/// Concurrency-safe entity store keyed by `namespace/name`
pub struct Store<K: Resource> {
    inner: RwLock<Inner<K>>,
}

impl<K: Resource> Store<K> {
    /// Create a store with the namespace index registered
    pub fn new() -> Self {
        let mut indexers: Indexers<K> = HashMap::new();
        indexers.insert(NAMESPACE_INDEX.to_string(), namespace_index_func::<K>);
        Self::with_indexers(indexers)
    }

    /// Create a store with no secondary indices
    ///
    /// Namespace enumeration falls back to a full scan.
    pub fn without_indexers() -> Self {
        Self::with_indexers(HashMap::new())
    }

    /// Create a store with the given index functions
    pub fn with_indexers(indexers: Indexers<K>) -> Self {
        let indices = indexers.keys().map(|name| (name.clone(), Index::new())).collect();
        Self {
            inner: RwLock::new(Inner {
                items: HashMap::new(),
                indexers,
                indices,
            }),
        }
    }

    /// Register more index functions
    ///
    /// Only allowed while the store is empty.
    pub fn add_indexers(&self, new_indexers: Indexers<K>) -> Result<(), IndexError> {
        let mut inner = self.inner.write();

        if !inner.items.is_empty() {
            return Err(IndexError::IndexerOnPopulatedStore(inner.items.len()));
        }
        if let Some(name) = new_indexers.keys().find(|name| inner.indexers.contains_key(*name)) {
            return Err(IndexError::IndexerConflict(format!(
                "indexer {} already exists",
                name
            )));
        }

        for (name, index_func) in new_indexers {
            inner.indices.insert(name.clone(), Index::new());
            inner.indexers.insert(name, index_func);
        }
        Ok(())
    }

    /// Insert an entity, replacing any entity stored under the same key
    pub fn add(&self, obj: K) -> Arc<K> {
        let key = key_for(&obj);
        let obj = Arc::new(obj);
        let mut inner = self.inner.write();

        let old = inner.items.insert(key.clone(), Arc::clone(&obj));
        inner.update_indices(&key, old.as_deref(), Some(&*obj));
        trace!(key = %key, replaced = old.is_some(), "stored entity");
        obj
    }

    /// Same as [`Store::add`]
    pub fn update(&self, obj: K) -> Arc<K> {
        self.add(obj)
    }

    /// Remove the entity stored under the key of `obj`
    pub fn delete(&self, obj: &K) -> Option<Arc<K>> {
        self.delete_by_key(&key_for(obj))
    }

    /// Remove the entity stored under `key`
    pub fn delete_by_key(&self, key: &str) -> Option<Arc<K>> {
        let mut inner = self.inner.write();
        let old = inner.items.remove(key)?;
        inner.update_indices(key, Some(&*old), None);
        trace!(key = %key, "deleted entity");
        Some(old)
    }

    /// Replace the whole content of the store
    pub fn replace(&self, items: impl IntoIterator<Item = K>) {
        let items: HashMap<String, Arc<K>> = items
            .into_iter()
            .map(|obj| (key_for(&obj), Arc::new(obj)))
            .collect();

        let mut inner = self.inner.write();
        let names: Vec<String> = inner.indexers.keys().cloned().collect();
        inner.indices = names.into_iter().map(|name| (name, Index::new())).collect();
        inner.items = HashMap::new();

        for (key, obj) in items {
            inner.update_indices(&key, None, Some(&*obj));
            inner.items.insert(key, obj);
        }
        debug!(count = inner.items.len(), "replaced store contents");
    }

    /// Entity stored under `key`
    pub fn get(&self, key: &str) -> Option<Arc<K>> {
        self.inner.read().items.get(key).cloned()
    }

    /// Snapshot of every stored entity
    pub fn list(&self) -> Vec<Arc<K>> {
        self.inner.read().items.values().cloned().collect()
    }

    /// Snapshot of every stored key
    pub fn list_keys(&self) -> Vec<String> {
        self.inner.read().items.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().items.is_empty()
    }

    /// Whether an index with this name is registered
    pub fn has_index(&self, index_name: &str) -> bool {
        self.inner.read().indexers.contains_key(index_name)
    }

    /// Entities whose index function produced `value` for `index_name`
    pub fn by_index(&self, index_name: &str, value: &str) -> Result<Vec<Arc<K>>, IndexError> {
        let inner = self.inner.read();
        let index = inner.index(index_name)?;
        Ok(index
            .get(value)
            .map(|keys| {
                keys.iter()
                    .filter_map(|key| inner.items.get(key).cloned())
                    .collect()
            })
            .unwrap_or_default())
    }

    /// Keys of entities whose index function produced `value` for `index_name`
    pub fn index_keys(&self, index_name: &str, value: &str) -> Result<Vec<String>, IndexError> {
        let inner = self.inner.read();
        let index = inner.index(index_name)?;
        Ok(index
            .get(value)
            .map(|keys| keys.iter().cloned().collect())
            .unwrap_or_default())
    }

    /// Every value currently present in `index_name`
    pub fn list_index_values(&self, index_name: &str) -> Result<Vec<String>, IndexError> {
        let inner = self.inner.read();
        let index = inner.index(index_name)?;
        Ok(index.keys().cloned().collect())
    }
}

impl<K: Resource> Default for Store<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Resource> Indexer<K> for Store<K> {
    fn get_by_key(&self, key: &str) -> Result<Option<Arc<K>>, IndexError> {
        Ok(self.get(key))
    }

    fn for_each(&self, visit: &mut dyn FnMut(&Arc<K>)) -> Result<(), IndexError> {
        // Visit outside the lock so visitors never block writers.
        for obj in &self.list() {
            visit(obj);
        }
        Ok(())
    }

    fn for_each_in_namespace(
        &self,
        namespace: &str,
        visit: &mut dyn FnMut(&Arc<K>),
    ) -> Result<(), IndexError> {
        if !self.has_index(NAMESPACE_INDEX) {
            debug!(namespace, "no namespace index registered, scanning all entities");
            return scan_namespace(self, namespace, visit);
        }

        for obj in &self.by_index(NAMESPACE_INDEX, namespace)? {
            visit(obj);
        }
        Ok(())
    }
}
