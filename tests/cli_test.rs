//! Integration tests for the CLI binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd(project: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("foundry-local-install"));
    cmd.current_dir(project.path());
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Foundry Local"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    cmd(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_invalid_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("bad.yml");
    fs::write(&config, "deployments: [")?;

    cmd(&temp)
        .args(["--config", config.to_str().unwrap_or_default(), "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[cfg(target_os = "linux")]
mod linux {
    use super::*;
    use std::ffi::OsString;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    #[test]
    fn status_reports_unsupported_platform() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        cmd(&temp)
            .env_remove("FOUNDRY_PLATFORM")
            .arg("status")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("only works on Windows or macOS"));
        Ok(())
    }

    #[test]
    fn status_json_reports_unsupported() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        cmd(&temp)
            .env_remove("FOUNDRY_PLATFORM")
            .args(["status", "--json"])
            .assert()
            .code(2)
            .stdout(predicate::str::contains("\"supported\":false"));
        Ok(())
    }

    #[test]
    fn install_logs_and_succeeds() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        cmd(&temp)
            .env_remove("FOUNDRY_PLATFORM")
            .arg("install")
            .assert()
            .success()
            .stderr(predicate::str::contains("OS not supported"));
        Ok(())
    }

    #[test]
    fn up_starts_resources_without_install() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        cmd(&temp)
            .env_remove("FOUNDRY_PLATFORM")
            .assert()
            .success()
            .stdout(predicate::str::contains("chatwebapp"));
        Ok(())
    }

    #[test]
    fn up_json_lists_resources() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        cmd(&temp)
            .env_remove("FOUNDRY_PLATFORM")
            .args(["up", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"model\":\"phi-3.5-mini\""));
        Ok(())
    }

    #[test]
    fn platform_override_reaches_package_manager() -> Result<(), Box<dyn std::error::Error>> {
        // brew is not expected on a Linux test host, so the probe cannot spawn.
        if which_brew() {
            return Ok(());
        }
        let temp = TempDir::new()?;
        cmd(&temp)
            .env("FOUNDRY_PLATFORM", "macos")
            .arg("status")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to start 'brew info FoundryLocal'"));
        Ok(())
    }

    /// Stand-in `brew` and `winget` scripts that append their argv and the
    /// `NONINTERACTIVE` value to a log, then print canned output.
    struct FakePackageManagers {
        bin: TempDir,
        log: PathBuf,
    }

    impl FakePackageManagers {
        fn new(brew_info: &str, winget_list: &str, install_exit: i32) -> std::io::Result<Self> {
            let bin = TempDir::new()?;
            let log = bin.path().join("calls.log");
            for (name, listing) in [("brew", format!("info) echo '{}' ;;", brew_info)), (
                "winget",
                format!("list) echo '{}' ;;", winget_list),
            )] {
                let script = format!(
                    "#!/bin/sh\n\
                     echo \"{name} $* NONINTERACTIVE=$NONINTERACTIVE\" >> '{log}'\n\
                     case \"$1\" in\n  {listing}\n  install) exit {install_exit} ;;\nesac\n",
                    log = log.display(),
                );
                let path = bin.path().join(name);
                fs::write(&path, script)?;
                fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
            }
            Ok(Self { bin, log })
        }

        fn path_var(&self) -> OsString {
            let inherited = std::env::var_os("PATH").unwrap_or_default();
            let dirs = std::iter::once(self.bin.path().to_path_buf())
                .chain(std::env::split_paths(&inherited));
            std::env::join_paths(dirs).unwrap_or_default()
        }

        fn calls(&self) -> Vec<String> {
            fs::read_to_string(&self.log)
                .map(|log| log.lines().map(str::to_string).collect())
                .unwrap_or_default()
        }
    }

    fn cmd_on(project: &TempDir, fakes: &FakePackageManagers, platform: &str) -> Command {
        let mut cmd = cmd(project);
        cmd.env("PATH", fakes.path_var())
            .env("FOUNDRY_PLATFORM", platform)
            .env_remove("NONINTERACTIVE");
        cmd
    }

    #[test]
    fn macos_install_runs_brew_noninteractively() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let fakes = FakePackageManagers::new("FoundryLocal: stable 0.3.9 Not Installed", "", 0)?;

        cmd_on(&temp, &fakes, "macos")
            .arg("install")
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Foundry Local not yet installed. Installing... (this might take a few minutes)",
            ));

        assert_eq!(
            fakes.calls(),
            vec![
                "brew info FoundryLocal NONINTERACTIVE=",
                "brew install foundrylocal NONINTERACTIVE=1",
            ]
        );
        Ok(())
    }

    #[test]
    fn macos_failed_brew_install_exits_one() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let fakes = FakePackageManagers::new("Not Installed", "", 3)?;

        cmd_on(&temp, &fakes, "macos")
            .arg("install")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Foundry Local not yet installed"));

        assert_eq!(fakes.calls().len(), 2);
        Ok(())
    }

    #[test]
    fn macos_up_installs_before_starting_resources() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let fakes = FakePackageManagers::new("Not Installed", "", 0)?;

        cmd_on(&temp, &fakes, "macos")
            .arg("up")
            .assert()
            .success()
            .stdout(predicate::str::contains("chatwebapp"))
            .stderr(predicate::str::contains("Ensure Foundry Local is installed"))
            .stderr(predicate::str::contains("Foundry Local not yet installed. Installing..."));

        assert_eq!(
            fakes.calls(),
            vec![
                "brew info FoundryLocal NONINTERACTIVE=",
                "brew install foundrylocal NONINTERACTIVE=1",
            ]
        );
        Ok(())
    }

    #[test]
    fn windows_install_skips_when_listed() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let fakes = FakePackageManagers::new("", "Microsoft.FoundryLocal 0.3.9 winget", 0)?;

        cmd_on(&temp, &fakes, "windows")
            .arg("install")
            .assert()
            .success()
            .stderr(predicate::str::contains("Foundry Local already installed."));

        assert_eq!(
            fakes.calls(),
            vec!["winget list --id=Microsoft.FoundryLocal NONINTERACTIVE="]
        );
        Ok(())
    }

    #[test]
    fn windows_install_runs_silent_winget() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let fakes = FakePackageManagers::new("", "No installed package found matching input criteria.", 0)?;

        cmd_on(&temp, &fakes, "windows")
            .args(["install", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"outcome\":\"installed\""))
            .stdout(predicate::str::contains("\"installed\":true"));

        assert_eq!(
            fakes.calls(),
            vec![
                "winget list --id=Microsoft.FoundryLocal NONINTERACTIVE=",
                "winget install Microsoft.FoundryLocal --accept-package-agreements \
                 --accept-source-agreements --silent NONINTERACTIVE=",
            ]
        );
        Ok(())
    }

    #[test]
    fn windows_status_reports_installed() -> Result<(), Box<dyn std::error::Error>> {
        let temp = TempDir::new()?;
        let fakes = FakePackageManagers::new("", "microsoft.foundrylocal 0.3.9", 0)?;

        cmd_on(&temp, &fakes, "windows")
            .arg("status")
            .assert()
            .success()
            .stdout(predicate::str::contains("Foundry Local is installed"));

        assert_eq!(fakes.calls().len(), 1);
        Ok(())
    }

    fn which_brew() -> bool {
        std::env::var_os("PATH")
            .map(|path| std::env::split_paths(&path).any(|dir| dir.join("brew").is_file()))
            .unwrap_or(false)
    }
}
