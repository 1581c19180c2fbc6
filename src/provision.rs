//! Provisioner boundary: the sole consumer of resolved settings.
//!
//! The resolver guarantees every creation-only field is already reconciled,
//! so the provisioner never consults prior state itself. The default
//! implementation shells out to an external VM driver binary with a JSON
//! payload on stdin.

use crate::error::ProvisionError;
use crate::profile::ProfileName;
use crate::settings::Settings;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;

/// Name of the driver binary looked up on PATH when `SKIFF_VMM` is unset.
pub const DEFAULT_DRIVER: &str = "skiff-vmm";

/// Environment variable overriding the driver binary.
pub const DRIVER_ENV: &str = "SKIFF_VMM";

/// Starts (or creates and starts) one environment.
pub trait Provisioner {
    fn start(&self, profile: &ProfileName, settings: &Settings) -> Result<(), ProvisionError>;
}

/// A host directory shared into the VM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MountPoint {
    pub location: String,
    pub writable: bool,
}

/// Parse a `path[:w]` mount spec. A bare path is read-only; the `:w` suffix
/// marks it writable. Any other suffix, or an empty path, is invalid.
pub fn parse_mount(spec: &str) -> Result<MountPoint, ProvisionError> {
    let (location, writable) = match spec.strip_suffix(":w") {
        Some(location) => (location, true),
        None => (spec, false),
    };
    if location.is_empty() || location.contains(':') {
        return Err(ProvisionError::InvalidMount(spec.to_string()));
    }
    Ok(MountPoint {
        location: location.to_string(),
        writable,
    })
}

/// What the driver receives on stdin. Mounts are carried pre-parsed so the
/// `path[:w]` CLI sugar never leaks past this boundary.
#[derive(Debug, Serialize)]
struct StartPayload<'a> {
    profile: &'a str,
    settings: &'a Settings,
    mounts: Vec<MountPoint>,
}

/// Spawns the external VM driver binary.
pub struct DriverProvisioner {
    driver: PathBuf,
}

impl DriverProvisioner {
    /// Driver from `SKIFF_VMM`, falling back to `skiff-vmm` on PATH.
    pub fn from_env() -> Self {
        let driver = std::env::var_os(DRIVER_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DRIVER));
        Self { driver }
    }

    pub fn with_driver(driver: PathBuf) -> Self {
        Self { driver }
    }
}

impl Provisioner for DriverProvisioner {
    fn start(&self, profile: &ProfileName, settings: &Settings) -> Result<(), ProvisionError> {
        let mounts = settings
            .mounts
            .iter()
            .map(|spec| parse_mount(spec))
            .collect::<Result<Vec<_>, _>>()?;

        let payload = serde_json::to_vec(&StartPayload {
            profile: profile.as_str(),
            settings,
            mounts,
        })?;

        debug!("Spawning VM driver {:?}", self.driver);
        let mut child = Command::new(&self.driver)
            .arg("start")
            .stdin(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ProvisionError::DriverNotFound(self.driver.display().to_string())
                } else {
                    ProvisionError::Io(e)
                }
            })?;

        // Scope ends the write and closes the driver's stdin.
        {
            let stdin = child.stdin.as_mut().ok_or_else(|| {
                ProvisionError::Io(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "driver stdin unavailable",
                ))
            })?;
            stdin.write_all(&payload)?;
        }
        drop(child.stdin.take());

        let status = child.wait()?;
        if !status.success() {
            return Err(ProvisionError::DriverFailed(status.to_string()));
        }
        Ok(())
    }
}
