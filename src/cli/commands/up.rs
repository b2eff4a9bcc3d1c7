//! Up command implementation.
//!
//! `foundry-local-install up` builds the app host from config and starts
//! every resource. The Foundry Local resource fires the install hook before
//! it is marked ready; everything else waits on it.

use std::sync::Arc;

use crate::cli::args::UpArgs;
use crate::config::AppHostConfig;
use crate::error::{InstallError, Result};
use crate::hook::AppHost;
use crate::install::InstallManager;
use crate::shell::ProcessRunner;
use crate::ui::Output;

use super::dispatcher::{Command, CommandResult};

/// The up command implementation.
pub struct UpCommand<R> {
    config: AppHostConfig,
    manager: Arc<InstallManager<R>>,
    args: UpArgs,
}

impl<R: ProcessRunner + Send + Sync + 'static> UpCommand<R> {
    pub fn new(config: AppHostConfig, manager: Arc<InstallManager<R>>, args: UpArgs) -> Self {
        Self {
            config,
            manager,
            args,
        }
    }
}

impl<R: ProcessRunner + Send + Sync + 'static> Command for UpCommand<R> {
    fn execute(&self, output: &Output) -> Result<CommandResult> {
        let mut config = self.config.clone();
        config.skip_install |= self.args.skip_install;

        let mut host = AppHost::from_config(&config, Arc::clone(&self.manager))?;
        if !self.args.json {
            output.header("Starting resources");
        }

        // A failed resource is reported through the per-resource states below.
        match host.start() {
            Ok(()) | Err(InstallError::ResourceFailed { .. }) => {}
            Err(e) => return Err(e),
        }

        if self.args.json {
            let value = serde_json::to_string(host.resources()).map_err(anyhow::Error::from)?;
            output.raw(&value);
        } else {
            for resource in host.resources() {
                output.raw(&output.theme().format_resource(
                    &resource.name,
                    &resource.state.to_string(),
                    resource.state.is_ready(),
                ));
            }
        }

        Ok(if host.is_ready() {
            CommandResult::success()
        } else {
            CommandResult::failure(1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::PackageSpec;
    use crate::platform::Platform;
    use crate::shell::RecordingRunner;
    use crate::ui::{OutputMode, Theme};

    fn command(platform: Platform, runner: RecordingRunner, args: UpArgs) -> UpCommand<RecordingRunner> {
        let manager = Arc::new(InstallManager::new(platform, PackageSpec::default(), runner));
        UpCommand::new(AppHostConfig::default(), manager, args)
    }

    fn quiet() -> Output {
        Output::with_theme(OutputMode::Quiet, Theme::plain())
    }

    #[test]
    fn starts_all_resources() {
        let cmd = command(
            Platform::Windows,
            RecordingRunner::new().with_stdout("Microsoft.FoundryLocal"),
            UpArgs::default(),
        );
        assert_eq!(cmd.execute(&quiet()).unwrap(), CommandResult::success());
    }

    #[test]
    fn skip_install_flag_bypasses_probe() {
        let cmd = command(
            Platform::MacOS,
            RecordingRunner::new().with_stdout("Not Installed"),
            UpArgs {
                json: true,
                skip_install: true,
            },
        );
        cmd.execute(&quiet()).unwrap();
        assert!(cmd.manager.runner().captured().is_empty());
    }

    #[test]
    fn spawn_failure_reports_failed_resources() {
        let cmd = command(
            Platform::MacOS,
            RecordingRunner::new().with_missing_executable(),
            UpArgs::default(),
        );
        let result = cmd.execute(&quiet()).unwrap();
        assert_eq!(result.exit_code, 1);
    }
}
