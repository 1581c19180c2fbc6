//! CLI presentation: text and JSON renderings of saved profile records.

use crate::error::AppError;
use crate::settings::Settings;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde::Serialize;

pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Saved configuration of one profile, for `skiff show`.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileReport {
    pub profile: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_saved: Option<String>,
    pub settings: Settings,
}

/// One row for `skiff list`.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileListEntry {
    pub profile: String,
    pub runtime: String,
    pub arch: String,
    pub cpu: u32,
    pub memory: u32,
    pub disk: u32,
    pub kubernetes: bool,
}

impl ProfileListEntry {
    pub fn from_settings(profile: &str, settings: &Settings) -> Self {
        Self {
            profile: profile.to_string(),
            runtime: settings.runtime.to_string(),
            arch: settings.arch.to_string(),
            cpu: settings.cpu,
            memory: settings.memory,
            disk: settings.disk,
            kubernetes: settings.kubernetes.enabled,
        }
    }
}

pub fn format_profile_report_text(report: &ProfileReport) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading(&format!("Profile: {}", report.profile))
    ));
    out.push_str(&format!("  Record: {}\n", report.path));
    if let Some(ref saved) = report.last_saved {
        out.push_str(&format!("  Last saved: {}\n", saved));
    }
    out.push('\n');

    let settings = &report.settings;
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec!["runtime".to_string(), settings.runtime.to_string()]);
    table.add_row(vec!["arch".to_string(), settings.arch.to_string()]);
    table.add_row(vec!["cpu".to_string(), settings.cpu.to_string()]);
    if let Some(ref cpu_type) = settings.cpu_type {
        table.add_row(vec!["cpu type".to_string(), cpu_type.clone()]);
    }
    table.add_row(vec![
        "memory".to_string(),
        format!("{} GiB", settings.memory),
    ]);
    table.add_row(vec!["disk".to_string(), format!("{} GiB", settings.disk)]);
    if !settings.mounts.is_empty() {
        table.add_row(vec!["mounts".to_string(), settings.mounts.join(", ")]);
    }
    table.add_row(vec![
        "ssh agent".to_string(),
        yes_no(settings.forward_agent),
    ]);
    if !settings.dns.is_empty() {
        let dns: Vec<String> = settings.dns.iter().map(|ip| ip.to_string()).collect();
        table.add_row(vec!["dns".to_string(), dns.join(", ")]);
    }
    table.add_row(vec![
        "network address".to_string(),
        yes_no(settings.network.address),
    ]);
    table.add_row(vec![
        "network user-mode".to_string(),
        yes_no(settings.network.user_mode),
    ]);
    table.add_row(vec![
        "kubernetes".to_string(),
        if settings.kubernetes.enabled {
            settings.kubernetes.version.clone()
        } else {
            "disabled".to_string()
        },
    ]);
    out.push_str(&format!("{}\n", table));
    out
}

pub fn format_profile_report_json(report: &ProfileReport) -> Result<String, AppError> {
    serde_json::to_string_pretty(report)
        .map_err(|e| AppError::Config(format!("Failed to encode report: {}", e)))
}

pub fn format_missing_profile(profile: &str, format: &str) -> Result<String, AppError> {
    if format == "json" {
        let out = serde_json::json!({ "profile": profile, "saved": false });
        serde_json::to_string_pretty(&out)
            .map_err(|e| AppError::Config(format!("Failed to encode report: {}", e)))
    } else {
        Ok(format!(
            "Profile '{}' has no saved configuration yet. Run 'skiff start' to create one.",
            profile
        ))
    }
}

pub fn format_profile_list_text(entries: &[ProfileListEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Profiles")));
    if entries.is_empty() {
        out.push_str("No saved profiles.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec![
        "Profile",
        "Runtime",
        "Arch",
        "CPUs",
        "Memory",
        "Disk",
        "Kubernetes",
    ]);
    for entry in entries {
        table.add_row(vec![
            entry.profile.clone(),
            entry.runtime.clone(),
            entry.arch.clone(),
            entry.cpu.to_string(),
            format!("{} GiB", entry.memory),
            format!("{} GiB", entry.disk),
            yes_no(entry.kubernetes),
        ]);
    }
    out.push_str(&format!("{}\n", table));
    out
}

pub fn format_profile_list_json(entries: &[ProfileListEntry]) -> Result<String, AppError> {
    let out = serde_json::json!({ "profiles": entries, "total": entries.len() });
    serde_json::to_string_pretty(&out)
        .map_err(|e| AppError::Config(format!("Failed to encode list: {}", e)))
}

fn yes_no(value: bool) -> String {
    if value { "yes" } else { "no" }.to_string()
}
