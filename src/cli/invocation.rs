//! Invocation layer: parsed start flags to typed settings.
//!
//! Also captures which fields were explicitly typed, read from argument
//! provenance in the parsed matches. `--cpu 2` is explicit even though 2 is
//! the default, so explicitness is never a value comparison.

use crate::cli::parse::StartArgs;
use crate::platform::Platform;
use crate::settings::fields::{ExplicitFields, Field};
use crate::settings::Settings;
use clap::parser::{ArgMatches, ValueSource};

/// Build the invocation settings: built-in defaults overridden by whatever
/// flags were supplied.
pub fn invocation_settings(args: &StartArgs) -> Settings {
    let mut settings = Settings::default();
    settings.runtime = args.runtime;
    settings.arch = args.arch;
    settings.cpu = args.cpu;
    settings.cpu_type = args.cpu_type.clone();
    settings.memory = args.memory;
    settings.disk = args.disk;
    settings.mounts = args.mount.clone();
    settings.forward_agent = args.ssh_agent;
    settings.dns = args.dns.clone();
    settings.env = args.env.iter().cloned().collect();
    settings.kubernetes.enabled = args.with_kubernetes;
    settings.kubernetes.version = args.kubernetes_version.clone();
    #[cfg(target_os = "macos")]
    {
        settings.network.address = args.network_address;
        settings.network.user_mode = args.network_user_mode;
    }
    settings
}

/// Fields the user explicitly supplied on the command line, from the parsed
/// matches of the start subcommand. Fields the platform does not support are
/// never reported explicit.
pub fn explicit_fields(matches: &ArgMatches, platform: Platform) -> ExplicitFields {
    Field::all()
        .iter()
        .copied()
        .filter(|field| platform.supports(*field))
        // Gated args are compiled out of the flag surface on unsupported
        // hosts, so guard the id lookup.
        .filter(|field| matches.try_contains_id(field.arg_id()).is_ok())
        .filter(|field| {
            matches.value_source(field.arg_id()) == Some(ValueSource::CommandLine)
        })
        .collect()
}
