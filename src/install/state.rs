//! Memoized probe state and install outcomes.

use serde::Serialize;

/// Outcome of a call to [`InstallManager::install`](super::InstallManager::install).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum InstallOutcome {
    /// Detection found the runtime; nothing was spawned for installation.
    AlreadyInstalled,

    /// The installer ran and exited successfully.
    Installed { exit_code: Option<i32> },

    /// The installer ran and exited with a failure code.
    ///
    /// The memoized probe result is not refreshed, so this is the only
    /// in-process signal that the install may not have taken.
    InstallFailed { exit_code: Option<i32> },

    /// The host OS has no install path; nothing was spawned.
    Unsupported { os: String },
}

impl InstallOutcome {
    /// Whether the runtime is expected to be present after this outcome.
    pub fn is_present(&self) -> bool {
        matches!(
            self,
            InstallOutcome::AlreadyInstalled | InstallOutcome::Installed { .. }
        )
    }
}

/// Memoized outcome of a detection probe.
///
/// Once `checked` is true, `installed` is never recomputed for the
/// lifetime of the owning manager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InstallState {
    /// Whether a detection probe has already run.
    pub checked: bool,

    /// Cached probe result; meaningful only when `checked` is true.
    pub installed: bool,

    /// Result of the single install attempt, if one has run.
    pub install_attempt: Option<InstallOutcome>,
}

impl InstallState {
    /// The cached probe result, if a probe has run.
    pub fn memoized(&self) -> Option<bool> {
        self.checked.then_some(self.installed)
    }

    /// Record a probe result. Later calls are ignored.
    pub fn record_probe(&mut self, installed: bool) {
        if !self.checked {
            self.checked = true;
            self.installed = installed;
        }
    }
}
