//! The `Task` kind (`tekton.dev/v1alpha1`)
//!
//! Only `metadata` matters to the cache; `spec` is carried through as
//! payload for callers.

use super::{ObjectMeta, Resource};
use serde::{Deserialize, Serialize};

/// A reusable sequence of steps run in a pod
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,

    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: TaskSpec,
}

/// Desired state of a task
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<ParamSpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

/// Declared task parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamSpec {
    pub name: String,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub param_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

/// Container step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub image: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
}

impl Task {
    /// Create an empty task at `namespace/name`
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            api_version: Self::api_version(),
            kind: Self::KIND.to_string(),
            metadata: ObjectMeta::new(namespace, name),
            spec: TaskSpec::default(),
        }
    }

    /// Add a label (builder style)
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata = self.metadata.with_label(key, value);
        self
    }

    /// Add a step (builder style)
    pub fn with_step(mut self, name: impl Into<String>, image: impl Into<String>) -> Self {
        self.spec.steps.push(Step {
            name: name.into(),
            image: image.into(),
            ..Step::default()
        });
        self
    }
}

impl Resource for Task {
    const KIND: &'static str = "Task";
    const GROUP: &'static str = "tekton.dev";
    const VERSION: &'static str = "v1alpha1";
    const RESOURCE: &'static str = "task";

    fn metadata(&self) -> &ObjectMeta {
        &self.metadata
    }
}
