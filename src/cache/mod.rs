//! Local entity cache
//!
//! The [`Indexer`] trait is the read contract listers depend on. Whatever
//! keeps the cache in sync with the remote authority owns the indexer and
//! writes to it; listers never do.
//!
//! # Keys
//!
//! Entities are keyed by `namespace/name` (see [`key`]). The namespace
//! part may be empty for cluster-scoped entities, in which case the key
//! is `/name`.
//!
//! # Indices
//!
//! [`Store`] maintains named secondary indices. The `namespace` index is
//! registered by default and backs namespace-scoped enumeration; without
//! it, enumeration falls back to a full scan.

pub mod indexer;
pub mod key;
pub mod list;
pub mod store;

pub use indexer::Indexer;
pub use key::{key_for, object_key, split_key};
pub use list::{list_all, list_all_by_namespace};
pub use store::{namespace_index_func, IndexFunc, Indexers, Store, NAMESPACE_INDEX};
