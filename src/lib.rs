//! Foundry Local install manager.
//!
//! Detects whether the Foundry Local runtime is present on the host,
//! installs it through the platform's package manager (Homebrew on macOS,
//! winget on Windows) when missing, and exposes that as an initialization
//! hook fired before dependent resources start.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, merging, and validation
//! - [`error`] - Error types and result aliases
//! - [`hook`] - Initialization hooks and the app host that fires them
//! - [`install`] - The memoizing install manager
//! - [`package`] - Package identifiers and per-platform command plans
//! - [`platform`] - Host platform detection
//! - [`shell`] - Child-process execution
//! - [`ui`] - Terminal output and spinners
//!
//! # Example
//!
//! ```
//! use foundry_local_install::install::InstallManager;
//! use foundry_local_install::package::PackageSpec;
//! use foundry_local_install::platform::Platform;
//! use foundry_local_install::shell::RecordingRunner;
//!
//! let runner = RecordingRunner::new()
//!     .with_stdout("FoundryLocal: stable 1.0.0 (bottled) Not Installed");
//! let manager = InstallManager::new(Platform::MacOS, PackageSpec::default(), runner);
//!
//! assert!(!manager.is_installed().unwrap());
//! manager.install().unwrap();
//! assert_eq!(manager.runner().ran(), vec!["brew install foundrylocal"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod hook;
pub mod install;
pub mod package;
pub mod platform;
pub mod shell;
pub mod ui;

pub use error::{InstallError, Result};
