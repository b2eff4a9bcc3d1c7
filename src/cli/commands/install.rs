//! Install command implementation.
//!
//! `foundry-local-install install` installs Foundry Local when the probe
//! says it is missing. A failed installer exits 1; an unsupported platform
//! is reported but exits 0, matching the install hook's behavior.

use std::sync::Arc;

use crate::cli::args::InstallArgs;
use crate::error::Result;
use crate::install::{InstallManager, InstallOutcome};
use crate::shell::ProcessRunner;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand<R> {
    manager: Arc<InstallManager<R>>,
    args: InstallArgs,
}

impl<R: ProcessRunner> InstallCommand<R> {
    pub fn new(manager: Arc<InstallManager<R>>, args: InstallArgs) -> Self {
        Self { manager, args }
    }
}

impl<R: ProcessRunner> Command for InstallCommand<R> {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        if !self.args.json {
            output.header("Foundry Local");
        }

        let outcome = self.manager.install()?;

        if self.args.json {
            let mut report = serde_json::to_value(&outcome).map_err(anyhow::Error::from)?;
            report["installed"] = outcome.is_present().into();
            output.raw(&report.to_string());
        } else {
            match &outcome {
                InstallOutcome::AlreadyInstalled => output.success("Already installed"),
                InstallOutcome::Installed { .. } => output.success("Installed"),
                InstallOutcome::InstallFailed { exit_code } => output.error(&format!(
                    "Installer exited with {}",
                    exit_code.map_or_else(|| "a signal".to_string(), |c| format!("code {}", c))
                )),
                InstallOutcome::Unsupported { os } => {
                    output.warning(&format!("Installation is not supported on {}", os))
                }
            }
        }

        Ok(match outcome {
            InstallOutcome::InstallFailed { .. } => CommandResult::failure(1),
            _ => CommandResult::success(),
        })
    }
}
