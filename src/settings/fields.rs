//! Field identities and carry-forward classes
//!
//! Every setting that participates in resolution is listed here together
//! with the class deciding how its saved value relates to later starts.
//! The environment-variable map is deliberately absent: it is session-local
//! and never read back from the saved record.

use std::collections::BTreeSet;

/// How a saved value carries into later starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass {
    /// Fixed when the environment is first created. The driver cannot apply
    /// a change to an existing machine, so omitting the flag must never
    /// revert the value to a built-in default.
    CreationOnly,

    /// Re-applied on every start. Omitting the flag carries the saved value
    /// forward.
    EveryStart,
}

/// A setting the resolver merges between invocation and saved record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Runtime,
    Arch,
    Cpu,
    CpuType,
    Memory,
    Disk,
    Mounts,
    SshAgent,
    Dns,
    KubernetesEnabled,
    KubernetesVersion,
    NetworkAddress,
    NetworkUserMode,
}

impl Field {
    pub fn all() -> &'static [Field] {
        &[
            Field::Runtime,
            Field::Arch,
            Field::Cpu,
            Field::CpuType,
            Field::Memory,
            Field::Disk,
            Field::Mounts,
            Field::SshAgent,
            Field::Dns,
            Field::KubernetesEnabled,
            Field::KubernetesVersion,
            Field::NetworkAddress,
            Field::NetworkUserMode,
        ]
    }

    pub fn class(self) -> FieldClass {
        match self {
            Field::Runtime | Field::Arch | Field::Disk | Field::KubernetesVersion => {
                FieldClass::CreationOnly
            }
            Field::Cpu
            | Field::CpuType
            | Field::Memory
            | Field::Mounts
            | Field::SshAgent
            | Field::Dns
            | Field::KubernetesEnabled
            | Field::NetworkAddress
            | Field::NetworkUserMode => FieldClass::EveryStart,
        }
    }

    /// Long flag name as shown in user-facing messages.
    pub fn flag_name(self) -> &'static str {
        match self {
            Field::Runtime => "runtime",
            Field::Arch => "arch",
            Field::Cpu => "cpu",
            Field::CpuType => "cpu-type",
            Field::Memory => "memory",
            Field::Disk => "disk",
            Field::Mounts => "mount",
            Field::SshAgent => "ssh-agent",
            Field::Dns => "dns",
            Field::KubernetesEnabled => "with-kubernetes",
            Field::KubernetesVersion => "kubernetes-version",
            Field::NetworkAddress => "network-address",
            Field::NetworkUserMode => "network-user-mode",
        }
    }

    /// Argument id in the parsed start command.
    pub fn arg_id(self) -> &'static str {
        match self {
            Field::Runtime => "runtime",
            Field::Arch => "arch",
            Field::Cpu => "cpu",
            Field::CpuType => "cpu_type",
            Field::Memory => "memory",
            Field::Disk => "disk",
            Field::Mounts => "mount",
            Field::SshAgent => "ssh_agent",
            Field::Dns => "dns",
            Field::KubernetesEnabled => "with_kubernetes",
            Field::KubernetesVersion => "kubernetes_version",
            Field::NetworkAddress => "network_address",
            Field::NetworkUserMode => "network_user_mode",
        }
    }

    /// True for fields that only exist on hosts with vmnet networking.
    pub fn platform_gated(self) -> bool {
        matches!(self, Field::NetworkAddress | Field::NetworkUserMode)
    }
}

/// The set of fields the user explicitly supplied on this invocation.
///
/// Built from parsed flag provenance, never by comparing values against
/// defaults: `--cpu 2` is explicit even though 2 is the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExplicitFields(BTreeSet<Field>);

impl ExplicitFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field) {
        self.0.insert(field);
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Field> for ExplicitFields {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
