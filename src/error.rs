//! Error types for install-manager operations.
//!
//! This module defines [`InstallError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Only an unsupported host OS and a failure to spawn a child process are
//!   surfaced from the install manager itself
//! - Package-manager exit codes and output never become errors; they fold
//!   into a boolean or an [`InstallOutcome`](crate::install::InstallOutcome)
//! - Use `anyhow::Error` (via `InstallError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for install-manager operations.
#[derive(Debug, Error)]
pub enum InstallError {
    /// Host OS has no detection path (neither macOS nor Windows).
    #[error("Foundry Local installation only works on Windows or macOS (detected '{os}')")]
    UnsupportedPlatform { os: String },

    /// The child process could not be started at all.
    #[error("Failed to start '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidation { message: String },

    /// A resource hook failed during startup.
    #[error("Resource '{resource}' failed to initialize: {message}")]
    ResourceFailed { resource: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for install-manager operations.
pub type Result<T> = std::result::Result<T, InstallError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_platform_displays_os() {
        let err = InstallError::UnsupportedPlatform {
            os: "linux".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("linux"));
        assert!(msg.contains("Windows or macOS"));
    }

    #[test]
    fn spawn_failed_displays_command_and_source() {
        let err = InstallError::SpawnFailed {
            command: "brew info FoundryLocal".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("brew info FoundryLocal"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn spawn_failed_exposes_source() {
        use std::error::Error as _;

        let err = InstallError::SpawnFailed {
            command: "winget list".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn config_parse_displays_path_and_message() {
        let err = InstallError::ConfigParse {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_displays_message() {
        let err = InstallError::ConfigValidation {
            message: "duplicate resource 'chat'".into(),
        };
        assert!(err.to_string().contains("duplicate resource 'chat'"));
    }

    #[test]
    fn resource_failed_displays_resource_and_message() {
        let err = InstallError::ResourceFailed {
            resource: "foundry".into(),
            message: "hook failed".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("foundry"));
        assert!(msg.contains("hook failed"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: InstallError = io_err.into();
        assert!(matches!(err, InstallError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts_to_other() {
        let err: InstallError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, InstallError::Other(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
