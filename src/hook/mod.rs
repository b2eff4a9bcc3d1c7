//! Resource initialization hooks and the app host that fires them.
//!
//! - [`resource`] - Resource, kind, and lifecycle state types
//! - [`app_host`] - The [`AppHost`] that starts resources in order
//!
//! The install manager plugs in through [`EnsureInstalled`], registered on
//! the Foundry Local resource and fired once before it is marked ready.

pub mod app_host;
pub mod resource;

pub use app_host::AppHost;
pub use resource::{Resource, ResourceKind, ResourceState};

use std::sync::Arc;

use crate::error::Result;
use crate::install::InstallManager;
use crate::shell::ProcessRunner;

/// A callback fired while a resource initializes.
///
/// Hooks run synchronously on the starting thread. An `Err` fails the
/// resource; it is not retried.
pub trait InitializeHook: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Perform the hook's work, blocking until done.
    fn on_initialize(&self) -> Result<()>;
}

/// Hook that installs Foundry Local if it is missing.
pub struct EnsureInstalled<R> {
    manager: Arc<InstallManager<R>>,
}

impl<R> EnsureInstalled<R> {
    pub fn new(manager: Arc<InstallManager<R>>) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &Arc<InstallManager<R>> {
        &self.manager
    }
}

impl<R: ProcessRunner + Send + Sync> InitializeHook for EnsureInstalled<R> {
    fn name(&self) -> &str {
        "ensure-installed"
    }

    fn on_initialize(&self) -> Result<()> {
        tracing::info!("Ensure Foundry Local is installed");
        let outcome = self.manager.install()?;
        tracing::debug!("Install hook finished: {:?}", outcome);
        Ok(())
    }
}
