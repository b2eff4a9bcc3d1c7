//! App host: registers resources and starts them in dependency order.
//!
//! Resources start in registration order. A resource may only wait for
//! resources registered before it, so registration order is always a valid
//! start order. Before a resource is marked ready, every hook registered on
//! it runs to completion.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{validate, AppHostConfig};
use crate::error::{InstallError, Result};
use crate::install::InstallManager;
use crate::shell::ProcessRunner;

use super::resource::{Resource, ResourceKind, ResourceState};
use super::{EnsureInstalled, InitializeHook};

/// Owns the resource graph and its initialization hooks.
#[derive(Default)]
pub struct AppHost {
    resources: Vec<Resource>,
    hooks: HashMap<String, Vec<Box<dyn InitializeHook>>>,
}

impl AppHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the stock graph from config.
    ///
    /// The Foundry Local resource gets an [`EnsureInstalled`] hook unless
    /// `skip_install` is set. Deployments wait for it; projects wait for the
    /// deployments they reference.
    pub fn from_config<R>(config: &AppHostConfig, manager: Arc<InstallManager<R>>) -> Result<Self>
    where
        R: ProcessRunner + Send + Sync + 'static,
    {
        validate(config)?;

        let mut host = Self::new();
        host.add_resource(Resource::new(&config.foundry, ResourceKind::FoundryLocal))?;
        if config.skip_install {
            tracing::info!("Install hook disabled by config");
        } else {
            host.on_initialize(&config.foundry, EnsureInstalled::new(manager))?;
        }

        for deployment in &config.deployments {
            host.add_resource(
                Resource::new(
                    &deployment.name,
                    ResourceKind::Deployment {
                        model: deployment.model.clone(),
                        version: deployment.version.clone(),
                        format: deployment.format.clone(),
                    },
                )
                .wait_for(&config.foundry),
            )?;
        }

        for project in &config.projects {
            let resource = project
                .references
                .iter()
                .fold(Resource::new(&project.name, ResourceKind::Project), |r, dep| {
                    r.wait_for(dep)
                });
            host.add_resource(resource)?;
        }

        Ok(host)
    }

    /// Register a resource. Its dependencies must already be registered.
    pub fn add_resource(&mut self, resource: Resource) -> Result<()> {
        if self.resource(&resource.name).is_some() {
            return Err(InstallError::ConfigValidation {
                message: format!("Resource '{}' is already registered", resource.name),
            });
        }
        if let Some(missing) = resource
            .wait_for
            .iter()
            .find(|dep| self.resource(dep).is_none())
        {
            return Err(InstallError::ConfigValidation {
                message: format!(
                    "Resource '{}' waits for unknown resource '{}'",
                    resource.name, missing
                ),
            });
        }
        self.resources.push(resource);
        Ok(())
    }

    /// Register a hook fired when `resource` initializes.
    pub fn on_initialize(
        &mut self,
        resource: &str,
        hook: impl InitializeHook + 'static,
    ) -> Result<()> {
        if self.resource(resource).is_none() {
            return Err(InstallError::ConfigValidation {
                message: format!("Cannot add hook to unknown resource '{}'", resource),
            });
        }
        self.hooks
            .entry(resource.to_string())
            .or_default()
            .push(Box::new(hook));
        Ok(())
    }

    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.resources.iter().find(|r| r.name == name)
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Whether every resource is ready.
    pub fn is_ready(&self) -> bool {
        self.resources.iter().all(|r| r.state.is_ready())
    }

    /// Start every pending resource.
    ///
    /// A failed hook fails its resource and every resource waiting on it;
    /// unrelated resources still start.
    ///
    /// # Errors
    ///
    /// [`InstallError::ResourceFailed`] naming the first resource that failed.
    pub fn start(&mut self) -> Result<()> {
        let mut first_failure: Option<(String, String)> = None;

        for index in 0..self.resources.len() {
            if self.resources[index].state != ResourceState::Pending {
                continue;
            }

            let state = self.start_one(index);
            if let ResourceState::Failed(message) = &state {
                tracing::error!("Resource '{}' failed: {}", self.resources[index].name, message);
                if first_failure.is_none() {
                    first_failure = Some((self.resources[index].name.clone(), message.clone()));
                }
            } else {
                tracing::info!("Resource '{}' is ready", self.resources[index].name);
            }
            self.resources[index].state = state;
        }

        match first_failure {
            Some((resource, message)) => Err(InstallError::ResourceFailed { resource, message }),
            None => Ok(()),
        }
    }

    fn start_one(&mut self, index: usize) -> ResourceState {
        let name = self.resources[index].name.clone();

        for dep in &self.resources[index].wait_for {
            let ready = self.resource(dep).is_some_and(|r| r.state.is_ready());
            if !ready {
                return ResourceState::Failed(format!("dependency '{}' failed", dep));
            }
        }

        self.resources[index].state = ResourceState::Initializing;
        tracing::debug!("Initializing resource '{}'", name);

        if let Some(hooks) = self.hooks.get(&name) {
            for hook in hooks {
                tracing::debug!("Firing hook '{}' for '{}'", hook.name(), name);
                if let Err(e) = hook.on_initialize() {
                    return ResourceState::Failed(e.to_string());
                }
            }
        }

        ResourceState::Ready
    }
}
