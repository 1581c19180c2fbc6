//! Host capability gating
//!
//! The vmnet-backed network settings only exist on macOS hosts. Gating is a
//! small value type rather than scattered `cfg!` checks so resolution stays
//! testable on any host.

use crate::settings::fields::Field;

/// Capabilities of the host this invocation runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Platform {
    /// vmnet networking is available (macOS only)
    pub vmnet: bool,
}

impl Platform {
    /// Capabilities of the current host.
    pub fn host() -> Self {
        Self {
            vmnet: cfg!(target_os = "macos"),
        }
    }

    /// Whether a field participates in resolution on this host. Unsupported
    /// fields are absent from the flag surface and never copied from the
    /// saved record.
    pub fn supports(self, field: Field) -> bool {
        !field.platform_gated() || self.vmnet
    }
}
