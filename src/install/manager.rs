//! Install manager for the Foundry Local runtime.
//!
//! The `InstallManager` detects whether the runtime is present through the
//! host's package manager and installs it when missing. The probe result is
//! memoized for the lifetime of the manager, so the same manager asked
//! repeatedly only shells out once.
//!
//! # Example
//!
//! ```
//! use foundry_local_install::install::{InstallManager, InstallOutcome};
//! use foundry_local_install::package::PackageSpec;
//! use foundry_local_install::platform::Platform;
//! use foundry_local_install::shell::RecordingRunner;
//!
//! let runner = RecordingRunner::new()
//!     .with_stdout("Name  Id  Version\nFoundry Local  Microsoft.FoundryLocal  1.2.0");
//! let manager = InstallManager::new(Platform::Windows, PackageSpec::default(), runner);
//!
//! assert!(manager.is_installed().unwrap());
//! assert_eq!(manager.install().unwrap(), InstallOutcome::AlreadyInstalled);
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{InstallError, Result};
use crate::package::{install_plan, probe_plan, PackageSpec};
use crate::platform::Platform;
use crate::shell::{ProcessRunner, SystemRunner};

use super::state::{InstallOutcome, InstallState};

/// Detects and installs the runtime, memoizing the detection result.
///
/// Probe and install both run while holding the state lock, so concurrent
/// callers converge on a single probe and a single install attempt.
#[derive(Debug)]
pub struct InstallManager<R = SystemRunner> {
    platform: Platform,
    package: PackageSpec,
    runner: R,
    state: Mutex<InstallState>,
}

impl InstallManager<SystemRunner> {
    /// Create a manager for the detected host platform that spawns real processes.
    pub fn for_host(package: PackageSpec) -> Self {
        Self::new(Platform::detect(), package, SystemRunner)
    }
}

impl<R: ProcessRunner> InstallManager<R> {
    /// Create a manager with an explicit platform and runner.
    pub fn new(platform: Platform, package: PackageSpec, runner: R) -> Self {
        Self {
            platform,
            package,
            runner,
            state: Mutex::new(InstallState::default()),
        }
    }

    /// The platform this manager dispatches on.
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// The package identifiers this manager queries and installs.
    pub fn package(&self) -> &PackageSpec {
        &self.package
    }

    /// The underlying process runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Snapshot of the memoized state.
    pub fn state(&self) -> InstallState {
        self.lock_state().clone()
    }

    /// Whether the runtime is installed.
    ///
    /// The first call queries the package manager and blocks until the query
    /// exits; every later call returns the memoized answer without spawning.
    /// The query's exit code is ignored, only its output is inspected.
    ///
    /// # Errors
    ///
    /// [`InstallError::UnsupportedPlatform`] on hosts other than macOS and
    /// Windows, and [`InstallError::SpawnFailed`] if the package manager
    /// cannot be started.
    pub fn is_installed(&self) -> Result<bool> {
        let mut state = self.lock_state();
        self.probe(&mut state)
    }

    /// Install the runtime if detection says it is missing.
    ///
    /// Unsupported hosts log and return [`InstallOutcome::Unsupported`]
    /// without probing. At most one installer is spawned per manager; the
    /// memoized probe is not refreshed afterwards.
    ///
    /// # Errors
    ///
    /// Only [`InstallError::SpawnFailed`]. A nonzero installer exit is
    /// reported as [`InstallOutcome::InstallFailed`].
    pub fn install(&self) -> Result<InstallOutcome> {
        let Some(plan) = install_plan(&self.platform, &self.package) else {
            tracing::info!("OS not supported ({})", self.platform);
            return Ok(InstallOutcome::Unsupported {
                os: self.platform.os_name().to_string(),
            });
        };

        let mut state = self.lock_state();

        if self.probe(&mut state)? {
            tracing::info!("Foundry Local already installed.");
            return Ok(InstallOutcome::AlreadyInstalled);
        }

        if let Some(previous) = &state.install_attempt {
            tracing::info!(
                "Foundry Local install already attempted in this process ({:?})",
                previous
            );
            return Ok(previous.clone());
        }

        tracing::info!(
            "Foundry Local not yet installed. Installing... (this might take a few minutes)"
        );
        let result = self.runner.run(&plan.command)?;

        let outcome = if result.success {
            tracing::info!("'{}' finished in {:?}", plan.command, result.duration);
            InstallOutcome::Installed {
                exit_code: result.exit_code,
            }
        } else {
            tracing::warn!(
                "'{}' exited with {:?}; Foundry Local may not be installed",
                plan.command,
                result.exit_code
            );
            InstallOutcome::InstallFailed {
                exit_code: result.exit_code,
            }
        };

        state.install_attempt = Some(outcome.clone());
        Ok(outcome)
    }

    fn probe(&self, state: &mut InstallState) -> Result<bool> {
        if let Some(installed) = state.memoized() {
            tracing::debug!("Using memoized detection result: {}", installed);
            return Ok(installed);
        }

        let plan = probe_plan(&self.platform, &self.package).ok_or_else(|| {
            InstallError::UnsupportedPlatform {
                os: self.platform.os_name().to_string(),
            }
        })?;

        let result = self.runner.capture(&plan.command)?;
        let installed = plan.rule.is_installed(&result.stdout);
        tracing::debug!(
            "'{}' exited with {:?}; installed = {}",
            plan.command,
            result.exit_code,
            installed
        );

        state.record_probe(installed);
        Ok(installed)
    }

    fn lock_state(&self) -> MutexGuard<'_, InstallState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
