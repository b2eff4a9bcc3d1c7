//! Configuration file discovery and loading.

use crate::config::merger::merge_configs;
use crate::config::schema::AppHostConfig;
use crate::error::{InstallError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding project configuration.
pub const CONFIG_DIR: &str = ".foundry";

/// Paths to configuration files in priority order (later overrides earlier).
///
/// Merge order:
/// 1. User global config (`~/.foundry/config.yml`)
/// 2. Project config (`.foundry/config.yml`)
/// 3. Local overrides (`.foundry/config.local.yml`)
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub user_global: Option<PathBuf>,
    pub project: Option<PathBuf>,
    pub project_local: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover config files for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            user_global: dirs::home_dir()
                .map(|home| home.join(CONFIG_DIR).join("config.yml"))
                .filter(|p| p.exists()),
            project: existing(project_root.join(CONFIG_DIR).join("config.yml")),
            project_local: existing(project_root.join(CONFIG_DIR).join("config.local.yml")),
        }
    }

    /// Returns all existing config paths in merge order.
    pub fn all_existing(&self) -> Vec<&PathBuf> {
        [&self.user_global, &self.project, &self.project_local]
            .into_iter()
            .flatten()
            .collect()
    }
}

fn existing(path: PathBuf) -> Option<PathBuf> {
    path.exists().then_some(path)
}

/// Load a config file as raw YAML for merging.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|e| InstallError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Parse YAML content into an [`AppHostConfig`].
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<AppHostConfig> {
    if content.trim().is_empty() {
        return Ok(AppHostConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| InstallError::ConfigParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<AppHostConfig> {
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Discover and merge all config files for a project.
///
/// Having no config files at all is not an error; the defaults describe
/// the stock app host.
pub fn load_merged_config(project_root: &Path) -> Result<AppHostConfig> {
    let paths = ConfigPaths::discover(project_root);
    let existing = paths.all_existing();

    if existing.is_empty() {
        tracing::debug!("No config files found under {}", project_root.display());
        return Ok(AppHostConfig::default());
    }

    let mut configs = Vec::with_capacity(existing.len());
    for path in existing {
        tracing::debug!("Loading config from {}", path.display());
        configs.push(load_config_value(path)?);
    }

    serde_yaml::from_value(merge_configs(&configs)).map_err(|e| InstallError::ConfigParse {
        path: project_root.join(CONFIG_DIR).join("config.yml"),
        message: format!("Failed to parse merged config: {}", e),
    })
}

/// Load config with optional path override.
///
/// If `config_override` is provided, loads only that file without merging.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<AppHostConfig> {
    match config_override {
        Some(path) => load_config_file(path),
        None => load_merged_config(project_root),
    }
}
