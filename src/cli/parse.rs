//! CLI parse: clap types for skiff. No behavior; definitions only.

use crate::settings::{
    ContainerRuntime, HostArch, DEFAULT_CPU_COUNT, DEFAULT_DISK_GIB, DEFAULT_KUBERNETES_VERSION,
    DEFAULT_MEMORY_GIB,
};
use clap::{ArgAction, Parser, Subcommand};
use std::net::IpAddr;

/// Skiff - container runtimes in a lightweight virtual machine
#[derive(Parser)]
#[command(name = "skiff")]
#[command(about = "Container runtimes in a lightweight virtual machine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an environment.
    ///
    /// The --runtime, --disk and --arch flags apply when the environment is
    /// first created and are ignored on subsequent starts. Other omitted
    /// flags keep their last-used values.
    Start(StartArgs),
    /// Show the saved configuration for a profile
    Show {
        /// Profile name
        profile: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List profiles with a saved configuration
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Discard the saved configuration for a profile
    Reset {
        /// Profile name
        profile: Option<String>,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Flags for `skiff start`. Defaults here are the invocation-layer defaults;
/// whether a flag was actually typed is read from the parsed matches, never
/// inferred by comparing values against these defaults.
#[derive(Debug, clap::Args)]
pub struct StartArgs {
    /// Profile name
    pub profile: Option<String>,

    /// Container runtime (docker, containerd)
    #[arg(short = 'r', long, default_value_t = ContainerRuntime::Docker)]
    pub runtime: ContainerRuntime,

    /// Number of CPUs
    #[arg(short = 'c', long, default_value_t = DEFAULT_CPU_COUNT)]
    pub cpu: u32,

    /// The QEMU CPU type
    #[arg(long)]
    pub cpu_type: Option<String>,

    /// Memory in GiB
    #[arg(short = 'm', long, default_value_t = DEFAULT_MEMORY_GIB)]
    pub memory: u32,

    /// Disk size in GiB
    #[arg(short = 'd', long, default_value_t = DEFAULT_DISK_GIB)]
    pub disk: u32,

    /// Architecture (aarch64, x86_64)
    #[arg(short = 'a', long, default_value_t = HostArch::native())]
    pub arch: HostArch,

    /// Directories to mount, suffix ':w' for writable
    #[arg(short = 'v', long = "mount", value_name = "PATH[:w]")]
    pub mount: Vec<String>,

    /// Forward SSH agent to the VM
    #[arg(
        short = 's',
        long = "ssh-agent",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false
    )]
    pub ssh_agent: bool,

    /// Start the environment with Kubernetes
    #[arg(
        short = 'k',
        long = "with-kubernetes",
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false
    )]
    pub with_kubernetes: bool,

    /// The Kubernetes version
    #[arg(long, hide = true, default_value = DEFAULT_KUBERNETES_VERSION)]
    pub kubernetes_version: String,

    /// Environment variables for the VM
    #[arg(
        short = 'e',
        long = "env",
        hide = true,
        value_name = "KEY=value",
        value_parser = parse_env_pair
    )]
    pub env: Vec<(String, String)>,

    /// DNS servers for the VM
    #[arg(short = 'n', long)]
    pub dns: Vec<IpAddr>,

    /// Assign a reachable IP address to the VM
    #[cfg(target_os = "macos")]
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = true
    )]
    pub network_address: bool,

    /// Use user-mode networking for internet, ignored if --network-address=false
    #[cfg(target_os = "macos")]
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = true
    )]
    pub network_user_mode: bool,
}

fn parse_env_pair(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=value, got '{}'", raw))?;
    if key.is_empty() {
        return Err(format!("empty key in '{}'", raw));
    }
    Ok((key.to_string(), value.to_string()))
}
