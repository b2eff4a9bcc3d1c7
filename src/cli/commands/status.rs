//! Status command implementation.
//!
//! `foundry-local-install status` runs the detection probe and reports the
//! result. Exit codes: 0 installed, 1 not installed, 2 unsupported platform.

use std::sync::Arc;

use serde_json::json;

use crate::cli::args::StatusArgs;
use crate::error::{InstallError, Result};
use crate::install::InstallManager;
use crate::shell::ProcessRunner;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand<R> {
    manager: Arc<InstallManager<R>>,
    args: StatusArgs,
}

impl<R: ProcessRunner> StatusCommand<R> {
    pub fn new(manager: Arc<InstallManager<R>>, args: StatusArgs) -> Self {
        Self { manager, args }
    }

    fn report_json(&self, output: &Output, platform: String) -> Result<CommandResult> {
        let (report, result) = match self.manager.is_installed() {
            Ok(installed) => (
                json!({
                    "platform": platform,
                    "supported": true,
                    "installed": installed,
                }),
                if installed {
                    CommandResult::success()
                } else {
                    CommandResult::failure(1)
                },
            ),
            Err(e @ InstallError::UnsupportedPlatform { .. }) => (
                json!({
                    "platform": platform,
                    "supported": false,
                    "error": e.to_string(),
                }),
                CommandResult::failure(2),
            ),
            Err(e) => return Err(e),
        };
        output.raw(&report.to_string());
        Ok(result)
    }
}

impl<R: ProcessRunner> Command for StatusCommand<R> {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        let platform = self.manager.platform().to_string();
        if self.args.json {
            return self.report_json(output, platform);
        }

        let spinner = output.spinner("Checking for Foundry Local...");
        match self.manager.is_installed() {
            Ok(true) => {
                spinner.finish_success("Foundry Local is installed");
                Ok(CommandResult::success())
            }
            Ok(false) => {
                spinner.finish_warning("Foundry Local is not installed");
                output.message("Run 'foundry-local-install install' to install it.");
                Ok(CommandResult::failure(1))
            }
            Err(e @ InstallError::UnsupportedPlatform { .. }) => {
                spinner.finish_error(&e.to_string());
                Ok(CommandResult::failure(2))
            }
            Err(e) => {
                spinner.clear();
                Err(e)
            }
        }
    }
}
