//! Resource model for cached entities
//!
//! Every cached kind implements [`Resource`], which exposes its
//! [`ObjectMeta`] and the static group/resource names used when
//! reporting a missing entity. The rest of an entity is opaque to the
//! cache and listers.

pub mod meta;
pub mod task;

pub use meta::{Labels, ObjectMeta};
pub use task::{ParamSpec, Step, Task, TaskSpec};

use serde::{Deserialize, Serialize};
use std::fmt;

/// An API group paired with a resource name, e.g. `task.tekton.dev`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupResource {
    /// API group (empty for the core group)
    pub group: String,
    /// Resource name
    pub resource: String,
}

impl GroupResource {
    /// Create a group/resource pair
    pub fn new(group: impl Into<String>, resource: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            resource: resource.into(),
        }
    }
}

impl fmt::Display for GroupResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}", self.resource)
        } else {
            write!(f, "{}.{}", self.resource, self.group)
        }
    }
}

/// A cached entity kind
///
/// Implementors are shared between the indexer and its readers behind
/// `Arc`, so they must be `Send + Sync`.
pub trait Resource: Send + Sync + 'static {
    /// Kind name as emitted by the remote authority (e.g. `Task`)
    const KIND: &'static str;
    /// API group (e.g. `tekton.dev`)
    const GROUP: &'static str;
    /// API version within the group (e.g. `v1alpha1`)
    const VERSION: &'static str;
    /// Resource name used in not-found errors (e.g. `task`)
    const RESOURCE: &'static str;

    /// Object metadata
    fn metadata(&self) -> &ObjectMeta;

    /// Group/resource pair for this kind
    fn group_resource() -> GroupResource {
        GroupResource::new(Self::GROUP, Self::RESOURCE)
    }

    /// `group/version` string
    fn api_version() -> String {
        if Self::GROUP.is_empty() {
            Self::VERSION.to_string()
        } else {
            format!("{}/{}", Self::GROUP, Self::VERSION)
        }
    }

    fn name(&self) -> &str {
        &self.metadata().name
    }

    fn namespace(&self) -> &str {
        &self.metadata().namespace
    }

    fn labels(&self) -> &Labels {
        &self.metadata().labels
    }
}
