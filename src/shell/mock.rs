//! Recording process runner for testing.
//!
//! `RecordingRunner` implements [`ProcessRunner`] without spawning anything.
//! Captured queries return canned stdout, installs return a configured exit
//! code, and every invocation is recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use foundry_local_install::shell::{CommandSpec, ProcessRunner, RecordingRunner};
//!
//! let runner = RecordingRunner::new().with_stdout("FoundryLocal: Not Installed");
//! let result = runner.capture(&CommandSpec::new("brew").args(["info", "FoundryLocal"])).unwrap();
//!
//! assert!(result.stdout.contains("Not Installed"));
//! assert_eq!(runner.captured(), vec!["brew info FoundryLocal".to_string()]);
//! ```

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::error::{InstallError, Result};

use super::command::{CommandResult, CommandSpec, ProcessRunner};

/// Mock runner that records invocations and returns canned results.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    stdout: String,
    capture_exit_code: i32,
    run_exit_code: i32,
    spawn_missing: bool,
    captured: Mutex<Vec<CommandSpec>>,
    ran: Mutex<Vec<CommandSpec>>,
}

impl RecordingRunner {
    /// Create a runner returning empty output and exit code 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stdout returned from [`ProcessRunner::capture`].
    pub fn with_stdout(mut self, stdout: impl Into<String>) -> Self {
        self.stdout = stdout.into();
        self
    }

    /// Set the exit code returned from [`ProcessRunner::capture`].
    pub fn with_capture_exit_code(mut self, code: i32) -> Self {
        self.capture_exit_code = code;
        self
    }

    /// Set the exit code returned from [`ProcessRunner::run`].
    pub fn with_run_exit_code(mut self, code: i32) -> Self {
        self.run_exit_code = code;
        self
    }

    /// Fail every invocation as if the executable were not on PATH.
    pub fn with_missing_executable(mut self) -> Self {
        self.spawn_missing = true;
        self
    }

    /// Commands passed to `capture`, rendered as strings.
    pub fn captured(&self) -> Vec<String> {
        render(&self.captured)
    }

    /// Commands passed to `run`, rendered as strings.
    pub fn ran(&self) -> Vec<String> {
        render(&self.ran)
    }

    /// Full specs passed to `run`, including environment.
    pub fn ran_specs(&self) -> Vec<CommandSpec> {
        self.ran
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, log: &Mutex<Vec<CommandSpec>>, spec: &CommandSpec) -> Result<()> {
        log.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(spec.clone());
        if self.spawn_missing {
            return Err(InstallError::SpawnFailed {
                command: spec.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "program not found"),
            });
        }
        Ok(())
    }
}

fn render(log: &Mutex<Vec<CommandSpec>>) -> Vec<String> {
    log.lock()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn result_for(code: i32, stdout: String) -> CommandResult {
    if code == 0 {
        CommandResult::success(stdout, Duration::ZERO)
    } else {
        CommandResult::failure(Some(code), stdout, Duration::ZERO)
    }
}

impl ProcessRunner for RecordingRunner {
    fn capture(&self, spec: &CommandSpec) -> Result<CommandResult> {
        self.record(&self.captured, spec)?;
        Ok(result_for(self.capture_exit_code, self.stdout.clone()))
    }

    fn run(&self, spec: &CommandSpec) -> Result<CommandResult> {
        self.record(&self.ran, spec)?;
        Ok(result_for(self.run_exit_code, String::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_capture_and_run_separately() {
        let runner = RecordingRunner::new().with_stdout("out");
        runner.capture(&CommandSpec::new("a")).unwrap();
        runner.run(&CommandSpec::new("b").args(["x"])).unwrap();

        assert_eq!(runner.captured(), vec!["a".to_string()]);
        assert_eq!(runner.ran(), vec!["b x".to_string()]);
    }

    #[test]
    fn configured_exit_codes_are_returned() {
        let runner = RecordingRunner::new()
            .with_capture_exit_code(1)
            .with_run_exit_code(2);
        assert_eq!(runner.capture(&CommandSpec::new("a")).unwrap().exit_code, Some(1));
        assert_eq!(runner.run(&CommandSpec::new("b")).unwrap().exit_code, Some(2));
    }

    #[test]
    fn missing_executable_still_records_attempt() {
        let runner = RecordingRunner::new().with_missing_executable();
        assert!(runner.capture(&CommandSpec::new("brew")).is_err());
        assert_eq!(runner.captured().len(), 1);
    }
}
