//! Configuration loading, merging, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use foundry_local_install::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".foundry");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "skip_install: true").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert!(config.skip_install);
//! ```
//!
//! # Configuration File Locations
//!
//! Configuration is merged in this order:
//! 1. User global config (`~/.foundry/config.yml`)
//! 2. Project config (`.foundry/config.yml`)
//! 3. Local overrides (`.foundry/config.local.yml`)

pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use loader::{load_config, load_config_file, load_merged_config, parse_config, ConfigPaths};
pub use schema::{AppHostConfig, DeploymentConfig, ProjectConfig, FOUNDRY_RESOURCE};
pub use validator::{validate, validate_config, ValidationError};
