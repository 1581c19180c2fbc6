//! CLI domain: parse, invocation, route, output, and presentation only.
//! No domain orchestration; single route table dispatches to the store and
//! provisioner.

mod invocation;
mod output;
mod parse;
mod presentation;
mod route;

pub use invocation::{explicit_fields, invocation_settings};
pub use output::map_error;
pub use parse::{Cli, Commands, StartArgs};
pub use presentation::{
    format_missing_profile, format_profile_list_json, format_profile_list_text,
    format_profile_report_json, format_profile_report_text, ProfileListEntry, ProfileReport,
};
pub use route::RunContext;
