//! Command dispatching.
//!
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::cli::args::{Cli, Commands, UpArgs};
use crate::config::load_config;
use crate::error::Result;
use crate::install::InstallManager;
use crate::ui::Output;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, writing human or JSON output to `output`.
    fn execute(&self, output: &Output) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Process exit code (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
///
/// Owns the single [`InstallManager`] for the process; every command shares
/// it, so the detection probe runs at most once per invocation.
pub struct CommandDispatcher {
    project_root: PathBuf,
    config_override: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, config_override: Option<PathBuf>) -> Self {
        Self {
            project_root,
            config_override,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load config, build the host install manager, and run the command.
    pub fn dispatch(&self, cli: &Cli, output: &Output) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_override.as_deref())?;
        let manager = Arc::new(InstallManager::for_host(config.package.clone()));
        tracing::debug!("Dispatching on platform {}", manager.platform());

        match &cli.command {
            Some(Commands::Status(args)) => {
                super::status::StatusCommand::new(manager, args.clone()).execute(output)
            }
            Some(Commands::Install(args)) => {
                super::install::InstallCommand::new(manager, args.clone()).execute(output)
            }
            Some(Commands::Up(args)) => {
                super::up::UpCommand::new(config, manager, args.clone()).execute(output)
            }
            None => super::up::UpCommand::new(config, manager, UpArgs::default()).execute(output),
        }
    }
}
