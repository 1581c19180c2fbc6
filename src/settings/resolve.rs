//! Effective-settings resolution
//!
//! Merges the invocation settings (defaults plus explicit flags) with the
//! previously saved record. An explicit flag always wins; an omitted flag
//! takes the saved value so it does not silently revert to a default.
//! Resolution is pure: no I/O, no logging, same inputs give the same output.

use crate::platform::Platform;
use crate::settings::fields::{ExplicitFields, Field};
use crate::settings::Settings;

/// Compute the effective settings for one start.
///
/// `persisted` is `None` on the first-ever start and whenever the saved
/// record could not be loaded; in both cases the invocation settings are
/// returned unchanged. Fields the host platform does not support are never
/// copied from the saved record.
///
/// The environment-variable map is intentionally not resolved: it always
/// comes from the invocation.
pub fn resolve(
    invocation: Settings,
    explicit: &ExplicitFields,
    persisted: Option<&Settings>,
    platform: Platform,
) -> Settings {
    let Some(saved) = persisted else {
        return invocation;
    };

    let mut effective = invocation;
    for field in Field::all().iter().copied() {
        if !platform.supports(field) {
            continue;
        }
        if explicit.contains(field) {
            continue;
        }
        copy_saved(&mut effective, saved, field);
    }
    effective
}

fn copy_saved(effective: &mut Settings, saved: &Settings, field: Field) {
    match field {
        Field::Runtime => effective.runtime = saved.runtime,
        Field::Arch => effective.arch = saved.arch,
        Field::Cpu => effective.cpu = saved.cpu,
        Field::CpuType => effective.cpu_type = saved.cpu_type.clone(),
        Field::Memory => effective.memory = saved.memory,
        Field::Disk => effective.disk = saved.disk,
        Field::Mounts => effective.mounts = saved.mounts.clone(),
        Field::SshAgent => effective.forward_agent = saved.forward_agent,
        Field::Dns => effective.dns = saved.dns.clone(),
        Field::KubernetesEnabled => effective.kubernetes.enabled = saved.kubernetes.enabled,
        Field::KubernetesVersion => {
            effective.kubernetes.version = saved.kubernetes.version.clone()
        }
        Field::NetworkAddress => effective.network.address = saved.network.address,
        Field::NetworkUserMode => effective.network.user_mode = saved.network.user_mode,
    }
}
