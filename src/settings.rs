//! Environment settings
//!
//! The per-profile record of everything a start needs: the container runtime,
//! machine sizing, and what is shared into the VM. Defaults here are the CLI
//! flag defaults; the flag declarations reference the same constants so the
//! two can never drift apart.

pub mod fields;
pub mod resolve;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::net::IpAddr;

pub const DEFAULT_CPU_COUNT: u32 = 2;
pub const DEFAULT_MEMORY_GIB: u32 = 2;
pub const DEFAULT_DISK_GIB: u32 = 60;
pub const DEFAULT_KUBERNETES_VERSION: &str = "v1.23.4";

/// Container runtime run inside the VM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContainerRuntime {
    Docker,
    Containerd,
}

impl fmt::Display for ContainerRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerRuntime::Docker => f.write_str("docker"),
            ContainerRuntime::Containerd => f.write_str("containerd"),
        }
    }
}

/// Guest architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum HostArch {
    #[serde(rename = "x86_64")]
    #[value(name = "x86_64", alias = "amd64")]
    X86_64,

    #[serde(rename = "aarch64")]
    #[value(name = "aarch64", alias = "arm64")]
    Aarch64,
}

impl HostArch {
    /// Architecture of the host this binary runs on.
    pub fn native() -> Self {
        if cfg!(target_arch = "aarch64") {
            HostArch::Aarch64
        } else {
            HostArch::X86_64
        }
    }
}

impl fmt::Display for HostArch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostArch::X86_64 => f.write_str("x86_64"),
            HostArch::Aarch64 => f.write_str("aarch64"),
        }
    }
}

/// VM network settings. Only effective on hosts with vmnet networking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSettings {
    /// Assign the VM an IP address reachable from the host
    pub address: bool,

    /// Route internet traffic through user-mode networking
    pub user_mode: bool,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            address: true,
            user_mode: true,
        }
    }
}

/// Kubernetes settings for the VM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KubernetesSettings {
    /// Provision Kubernetes on start
    pub enabled: bool,

    /// Kubernetes version installed when the environment is created
    pub version: String,
}

impl Default for KubernetesSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            version: DEFAULT_KUBERNETES_VERSION.to_string(),
        }
    }
}

/// Settings for one environment.
///
/// Serialized to TOML for the profile store and to JSON for the driver
/// payload. Fields missing from a stored record fall back to defaults so
/// records written by older releases keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Container runtime (docker, containerd)
    pub runtime: ContainerRuntime,

    /// Guest architecture (x86_64, aarch64)
    pub arch: HostArch,

    /// Number of CPUs
    pub cpu: u32,

    /// QEMU CPU type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_type: Option<String>,

    /// Memory in GiB
    pub memory: u32,

    /// Disk size in GiB, fixed when the environment is created
    pub disk: u32,

    /// Host directories shared into the VM, `path[:w]` specs
    pub mounts: Vec<String>,

    /// Forward the host SSH agent into the VM
    pub forward_agent: bool,

    /// DNS servers for the VM
    pub dns: Vec<IpAddr>,

    /// Environment variables for the VM. Session-local: saved with the
    /// record but never carried forward into later starts.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,

    /// Network settings
    pub network: NetworkSettings,

    /// Kubernetes settings
    pub kubernetes: KubernetesSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            runtime: ContainerRuntime::Docker,
            arch: HostArch::native(),
            cpu: DEFAULT_CPU_COUNT,
            cpu_type: None,
            memory: DEFAULT_MEMORY_GIB,
            disk: DEFAULT_DISK_GIB,
            mounts: Vec::new(),
            forward_agent: false,
            dns: Vec::new(),
            env: HashMap::new(),
            network: NetworkSettings::default(),
            kubernetes: KubernetesSettings::default(),
        }
    }
}
