//! Lister - read-only views over an in-memory entity cache
//!
//! A [`Lister`] answers "list everything matching a label selector" and
//! "get one entity by namespace and name" from a local [`Indexer`],
//! never from the remote API.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod labels;
pub mod lister;
pub mod resource;
pub mod snapshot;
pub mod ui;

pub use cache::{Indexer, Store};
pub use error::{IndexError, ListerError, ListerResult};
pub use labels::Selector;
pub use lister::{Lister, NamespaceLister};
pub use resource::{Resource, Task};
