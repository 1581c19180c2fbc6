//! Shared test utilities for integration tests
//!
//! Runs the skiff binary against an isolated config home and a stub VM
//! driver script that captures the JSON payload it receives on stdin.

#![cfg(unix)]

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

pub struct TestEnv {
    pub temp: TempDir,
    driver: PathBuf,
    capture: PathBuf,
}

impl TestEnv {
    /// Create an isolated environment with a stub driver that records its
    /// stdin and exits with `SKIFF_DRIVER_EXIT` (default 0).
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let capture = temp.path().join("payload.json");
        let driver = temp.path().join("skiff-vmm");
        fs::write(
            &driver,
            format!(
                "#!/bin/sh\ncat > \"{}\"\nexit \"${{SKIFF_DRIVER_EXIT:-0}}\"\n",
                capture.display()
            ),
        )
        .unwrap();
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&driver, fs::Permissions::from_mode(0o755)).unwrap();
        }
        fs::create_dir_all(temp.path().join("home")).unwrap();
        fs::create_dir_all(temp.path().join("config")).unwrap();
        Self {
            temp,
            driver,
            capture,
        }
    }

    /// A skiff command wired to the isolated config home and stub driver.
    pub fn skiff(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_skiff"));
        cmd.env("HOME", self.temp.path().join("home"))
            .env("XDG_CONFIG_HOME", self.temp.path().join("config"))
            .env("SKIFF_VMM", &self.driver)
            .env_remove("SKIFF_LOG")
            .env_remove("SKIFF_LOG_FORMAT")
            .env_remove("SKIFF_DRIVER_EXIT");
        cmd
    }

    /// The payload the stub driver captured on its last run.
    pub fn payload(&self) -> serde_json::Value {
        let raw = fs::read_to_string(&self.capture).expect("driver was never invoked");
        serde_json::from_str(&raw).expect("driver payload should be JSON")
    }

    /// Path of the saved record for a profile, matching the store layout.
    pub fn record_path(&self, profile: &str) -> PathBuf {
        let base = if cfg!(target_os = "macos") {
            self.temp
                .path()
                .join("home/Library/Application Support/skiff")
        } else {
            self.temp.path().join("config/skiff")
        };
        base.join("profiles").join(format!("{}.toml", profile))
    }

    /// Overwrite the saved record for a profile with raw content.
    pub fn write_record(&self, profile: &str, content: &str) {
        let path = self.record_path(profile);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}
