//! Resources managed by the app host.

use serde::Serialize;
use std::fmt;

/// What a resource represents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceKind {
    /// The local model runtime itself.
    FoundryLocal,
    /// A model deployment on the runtime.
    Deployment {
        model: String,
        version: String,
        format: String,
    },
    /// An application project consuming deployments.
    Project,
}

/// Lifecycle state of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum ResourceState {
    Pending,
    Initializing,
    Ready,
    Failed(String),
}

impl ResourceState {
    pub fn is_ready(&self) -> bool {
        matches!(self, ResourceState::Ready)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ResourceState::Failed(_))
    }
}

impl fmt::Display for ResourceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceState::Pending => f.write_str("pending"),
            ResourceState::Initializing => f.write_str("initializing"),
            ResourceState::Ready => f.write_str("ready"),
            ResourceState::Failed(message) => write!(f, "failed: {}", message),
        }
    }
}

/// A named resource in the app host graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    pub name: String,
    #[serde(flatten)]
    pub kind: ResourceKind,
    /// Resources that must be ready before this one starts.
    pub wait_for: Vec<String>,
    #[serde(flatten)]
    pub state: ResourceState,
}

impl Resource {
    /// Create a pending resource with no dependencies.
    pub fn new(name: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            name: name.into(),
            kind,
            wait_for: Vec::new(),
            state: ResourceState::Pending,
        }
    }

    /// Add a dependency that must be ready first.
    pub fn wait_for(mut self, name: impl Into<String>) -> Self {
        self.wait_for.push(name.into());
        self
    }
}
