//! Configuration schema.
//!
//! Every section has defaults matching the stock app host: a Foundry Local
//! resource, a `chat` deployment of `phi-3.5-mini`, and a `chatwebapp`
//! project that waits for it. An empty file is a valid config.

use crate::package::PackageSpec;
use serde::{Deserialize, Serialize};

/// Name of the Foundry Local resource every deployment hangs off.
pub const FOUNDRY_RESOURCE: &str = "foundry";

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppHostConfig {
    /// Name of the Foundry Local resource.
    pub foundry: String,

    /// Package identifiers used for detection and install.
    pub package: PackageSpec,

    /// Skip the install hook entirely (detection still available via `status`).
    pub skip_install: bool,

    /// Model deployments served by the Foundry Local resource.
    pub deployments: Vec<DeploymentConfig>,

    /// Projects that consume deployments.
    pub projects: Vec<ProjectConfig>,
}

impl Default for AppHostConfig {
    fn default() -> Self {
        Self {
            foundry: FOUNDRY_RESOURCE.to_string(),
            package: PackageSpec::default(),
            skip_install: false,
            deployments: vec![DeploymentConfig::default()],
            projects: vec![ProjectConfig::default()],
        }
    }
}

/// A model deployment on the Foundry Local resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentConfig {
    pub name: String,
    pub model: String,
    pub version: String,
    pub format: String,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            name: "chat".to_string(),
            model: "phi-3.5-mini".to_string(),
            version: "1".to_string(),
            format: "Microsoft".to_string(),
        }
    }
}

/// A project resource that references deployments and waits for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,

    /// Deployment names this project references.
    pub references: Vec<String>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "chatwebapp".to_string(),
            references: vec!["chat".to_string()],
        }
    }
}
