//! Child-process execution.
//!
//! Package managers are invoked directly (program + argument vector), never
//! through a shell. Every call blocks the caller until the child exits; no
//! timeout or cancellation is applied.

use crate::error::{InstallError, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// A fully specified child-process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Executable name, resolved through PATH.
    pub program: String,

    /// Arguments, passed verbatim.
    pub args: Vec<String>,

    /// Extra environment variables (merged with the inherited environment).
    pub env: BTreeMap<String, String>,
}

impl CommandSpec {
    /// Create a spec for `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: BTreeMap::new(),
        }
    }

    /// Append arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set an environment variable for the child.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        cmd.stdin(Stdio::null());
        cmd
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of executing a child process.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, stdout: String, duration: Duration) -> Self {
        Self {
            exit_code,
            stdout,
            duration,
            success: false,
        }
    }

    fn from_status(status: std::process::ExitStatus, stdout: String, duration: Duration) -> Self {
        if status.success() {
            Self::success(stdout, duration)
        } else {
            Self::failure(status.code(), stdout, duration)
        }
    }
}

/// Spawns child processes on behalf of the install manager.
///
/// A nonzero exit is reported through [`CommandResult`], not as an error.
/// Only a failure to start the process is an `Err`.
pub trait ProcessRunner {
    /// Run to completion, capturing the full standard output.
    fn capture(&self, spec: &CommandSpec) -> Result<CommandResult>;

    /// Run to completion with inherited stdio.
    fn run(&self, spec: &CommandSpec) -> Result<CommandResult>;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for &T {
    fn capture(&self, spec: &CommandSpec) -> Result<CommandResult> {
        (**self).capture(spec)
    }

    fn run(&self, spec: &CommandSpec) -> Result<CommandResult> {
        (**self).run(spec)
    }
}

/// [`ProcessRunner`] backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    fn spawn_error(spec: &CommandSpec, source: std::io::Error) -> InstallError {
        InstallError::SpawnFailed {
            command: spec.to_string(),
            source,
        }
    }
}

impl ProcessRunner for SystemRunner {
    fn capture(&self, spec: &CommandSpec) -> Result<CommandResult> {
        tracing::debug!("Capturing output of: {}", spec);
        let start = Instant::now();

        let mut cmd = spec.to_command();
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::null());

        let output = cmd.output().map_err(|e| Self::spawn_error(spec, e))?;
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();

        let result = CommandResult::from_status(output.status, stdout, start.elapsed());
        tracing::debug!(
            "'{}' exited with {:?} after {:?}",
            spec,
            result.exit_code,
            result.duration
        );
        Ok(result)
    }

    fn run(&self, spec: &CommandSpec) -> Result<CommandResult> {
        tracing::debug!("Running: {}", spec);
        let start = Instant::now();

        let mut cmd = spec.to_command();
        cmd.stdout(Stdio::inherit());
        cmd.stderr(Stdio::inherit());

        let status = cmd
            .spawn()
            .and_then(|mut child| child.wait())
            .map_err(|e| Self::spawn_error(spec, e))?;

        let result = CommandResult::from_status(status, String::new(), start.elapsed());
        tracing::debug!(
            "'{}' exited with {:?} after {:?}",
            spec,
            result.exit_code,
            result.duration
        );
        Ok(result)
    }
}
