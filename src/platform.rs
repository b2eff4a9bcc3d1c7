//! Host platform detection.
//!
//! The platform is resolved once at startup into a closed set of variants;
//! everything downstream dispatches on [`Platform`] instead of re-querying
//! the OS.

use std::fmt;

/// Environment variable that forces a platform name instead of the host OS.
pub const PLATFORM_OVERRIDE_VAR: &str = "FOUNDRY_PLATFORM";

/// Host platform for install dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Windows,
    /// Any other OS, carrying its name (e.g. "linux", "freebsd").
    Unsupported(String),
}

impl Platform {
    /// Detect the current platform from the compile target.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }

    /// Detect the platform, honoring [`PLATFORM_OVERRIDE_VAR`] when set.
    pub fn detect() -> Self {
        Self::detect_with_env(|key: &str| std::env::var(key))
    }

    /// Detect the platform with a custom env var lookup function.
    pub fn detect_with_env<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        match env_fn(PLATFORM_OVERRIDE_VAR) {
            Ok(name) if !name.trim().is_empty() => {
                tracing::debug!("Platform overridden via {}: {}", PLATFORM_OVERRIDE_VAR, name);
                Self::from_os_name(&name)
            }
            _ => Self::current(),
        }
    }

    /// Parse a platform from an OS name as reported by `std::env::consts::OS`.
    pub fn from_os_name(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        match name.as_str() {
            "macos" | "darwin" | "osx" => Platform::MacOS,
            "windows" | "win32" => Platform::Windows,
            _ => Platform::Unsupported(name),
        }
    }

    /// The OS name used in messages and errors.
    pub fn os_name(&self) -> &str {
        match self {
            Platform::MacOS => "macos",
            Platform::Windows => "windows",
            Platform::Unsupported(name) => name,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.os_name())
    }
}
