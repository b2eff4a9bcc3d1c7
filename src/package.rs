//! Package identifiers and per-platform command plans.
//!
//! Building a plan is a pure function of ([`Platform`], [`PackageSpec`]), so
//! detection can be tested against canned output without spawning anything.

use crate::platform::Platform;
use crate::shell::CommandSpec;
use serde::{Deserialize, Serialize};

/// Marker Homebrew prints for a formula that is known but not installed.
pub const BREW_NOT_INSTALLED_MARKER: &str = "Not Installed";

/// Package identifiers for each package manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageSpec {
    /// Formula name passed to `brew install`.
    pub brew_formula: String,

    /// Name passed to `brew info`.
    pub brew_info_name: String,

    /// Package id passed to `winget list` / `winget install`.
    pub winget_id: String,
}

impl Default for PackageSpec {
    fn default() -> Self {
        Self {
            brew_formula: "foundrylocal".to_string(),
            brew_info_name: "FoundryLocal".to_string(),
            winget_id: "Microsoft.FoundryLocal".to_string(),
        }
    }
}

/// How to decide "installed" from a query's standard output.
///
/// Both variants compare case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionRule {
    /// Installed unless the output contains the marker.
    AbsentMarker(String),
    /// Installed only if the output contains the marker.
    PresentMarker(String),
}

impl DetectionRule {
    /// Apply the rule to captured output.
    pub fn is_installed(&self, output: &str) -> bool {
        match self {
            DetectionRule::AbsentMarker(marker) => !contains_ignore_case(output, marker),
            DetectionRule::PresentMarker(marker) => contains_ignore_case(output, marker),
        }
    }
}

/// A read-only query plus the rule that interprets its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbePlan {
    pub command: CommandSpec,
    pub rule: DetectionRule,
}

/// An install invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub command: CommandSpec,
}

/// Build the detection query for a platform. `None` when unsupported.
pub fn probe_plan(platform: &Platform, package: &PackageSpec) -> Option<ProbePlan> {
    match platform {
        Platform::MacOS => Some(ProbePlan {
            command: CommandSpec::new("brew").args(["info", package.brew_info_name.as_str()]),
            rule: DetectionRule::AbsentMarker(BREW_NOT_INSTALLED_MARKER.to_string()),
        }),
        Platform::Windows => Some(ProbePlan {
            command: CommandSpec::new("winget")
                .args(["list".to_string(), format!("--id={}", package.winget_id)]),
            rule: DetectionRule::PresentMarker(package.winget_id.clone()),
        }),
        Platform::Unsupported(_) => None,
    }
}

/// Build the install invocation for a platform. `None` when unsupported.
pub fn install_plan(platform: &Platform, package: &PackageSpec) -> Option<InstallPlan> {
    match platform {
        Platform::MacOS => Some(InstallPlan {
            command: CommandSpec::new("brew")
                .args(["install", package.brew_formula.as_str()])
                .env("NONINTERACTIVE", "1"),
        }),
        Platform::Windows => Some(InstallPlan {
            command: CommandSpec::new("winget").args([
                "install",
                package.winget_id.as_str(),
                "--accept-package-agreements",
                "--accept-source-agreements",
                "--silent",
            ]),
        }),
        Platform::Unsupported(_) => None,
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
