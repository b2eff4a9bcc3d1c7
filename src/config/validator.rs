//! Configuration validation rules.
//!
//! - Resource names must be non-empty and unique across the app host
//! - Deployments must name a model
//! - Projects may only reference declared deployments

use crate::config::schema::AppHostConfig;
use crate::error::{InstallError, Result};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: &'static str,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    fn new(rule: &'static str, message: String) -> Self {
        Self { rule, message }
    }
}

/// Validate a configuration and return all errors.
pub fn validate_config(config: &AppHostConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    let names = std::iter::once(config.foundry.as_str())
        .chain(config.deployments.iter().map(|d| d.name.as_str()))
        .chain(config.projects.iter().map(|p| p.name.as_str()));

    for name in names {
        if name.trim().is_empty() {
            errors.push(ValidationError::new(
                "empty-name",
                "Resource names must not be empty".to_string(),
            ));
        } else if !seen.insert(name) {
            errors.push(ValidationError::new(
                "duplicate-resource",
                format!("Resource '{}' is declared more than once", name),
            ));
        }
    }

    for deployment in &config.deployments {
        if deployment.model.trim().is_empty() {
            errors.push(ValidationError::new(
                "missing-model",
                format!("Deployment '{}' must name a model", deployment.name),
            ));
        }
    }

    let deployments: HashSet<&str> = config.deployments.iter().map(|d| d.name.as_str()).collect();
    for project in &config.projects {
        for reference in &project.references {
            if !deployments.contains(reference.as_str()) {
                errors.push(ValidationError::new(
                    "unknown-reference",
                    format!(
                        "Project '{}' references '{}' which is not a deployment",
                        project.name, reference
                    ),
                ));
            }
        }
    }

    errors
}

/// Validate and fail on the first error.
pub fn validate(config: &AppHostConfig) -> Result<()> {
    match validate_config(config).into_iter().next() {
        Some(error) => Err(InstallError::ConfigValidation {
            message: error.message,
        }),
        None => Ok(()),
    }
}
