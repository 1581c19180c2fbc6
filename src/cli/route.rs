//! CLI route: single route table and run context. Dispatches to the store
//! and provisioner and renders through presentation.

use crate::cli::invocation::{explicit_fields, invocation_settings};
use crate::cli::parse::{Commands, StartArgs};
use crate::cli::presentation::{
    format_missing_profile, format_profile_list_json, format_profile_list_text,
    format_profile_report_json, format_profile_report_text, ProfileListEntry, ProfileReport,
};
use crate::error::AppError;
use crate::platform::Platform;
use crate::profile::ProfileName;
use crate::provision::{DriverProvisioner, Provisioner};
use crate::settings::fields::FieldClass;
use crate::settings::resolve::resolve;
use crate::store::{ProfileStore, TomlProfileStore};
use chrono::{DateTime, SecondsFormat, Utc};
use clap::parser::ArgMatches;
use tracing::{info, warn};

/// Runtime context for CLI execution: profile store, VM driver, and host
/// capabilities.
pub struct RunContext {
    store: Box<dyn ProfileStore>,
    provisioner: Box<dyn Provisioner>,
    platform: Platform,
}

impl RunContext {
    /// Context backed by the user config directory and the external driver.
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {
            store: Box::new(TomlProfileStore::new()?),
            provisioner: Box::new(DriverProvisioner::from_env()),
            platform: Platform::host(),
        })
    }

    /// Context with explicit collaborators. Used by tests.
    pub fn with_parts(
        store: Box<dyn ProfileStore>,
        provisioner: Box<dyn Provisioner>,
        platform: Platform,
    ) -> Self {
        Self {
            store,
            provisioner,
            platform,
        }
    }

    /// Execute a CLI command via the single route table. `matches` is the
    /// parsed root command, needed to read flag provenance for `start`.
    pub fn execute(&self, command: &Commands, matches: &ArgMatches) -> Result<String, AppError> {
        match command {
            Commands::Start(args) => {
                self.handle_start(args, matches.subcommand_matches("start"))
            }
            Commands::Show { profile, format } => {
                self.handle_show(profile.as_deref(), format)
            }
            Commands::List { format } => self.handle_list(format),
            Commands::Reset { profile, force } => {
                self.handle_reset(profile.as_deref(), *force)
            }
        }
    }

    /// Strict start sequence: load, resolve, start, save. A failed load is a
    /// warning, never an abort; the save runs only after a successful start.
    fn handle_start(
        &self,
        args: &StartArgs,
        start_matches: Option<&ArgMatches>,
    ) -> Result<String, AppError> {
        let profile = profile_name(args.profile.as_deref())?;
        let invocation = invocation_settings(args);
        let explicit = start_matches
            .map(|m| explicit_fields(m, self.platform))
            .unwrap_or_default();

        let persisted = match self.store.load(&profile) {
            Ok(persisted) => persisted,
            Err(e) => {
                warn!("config load failed: {}", e);
                warn!("reverting to default settings");
                None
            }
        };

        if persisted.is_some() {
            for field in explicit
                .iter()
                .filter(|f| f.class() == FieldClass::CreationOnly)
            {
                warn!(
                    "--{} takes effect only when the environment is first created",
                    field.flag_name()
                );
            }
        }

        let effective = resolve(invocation, &explicit, persisted.as_ref(), self.platform);
        info!("using {} runtime", effective.runtime);

        self.provisioner.start(&profile, &effective)?;
        self.store
            .save(&profile, &effective)
            .map_err(AppError::SaveFailed)?;

        Ok(format!("Environment '{}' is running", profile))
    }

    fn handle_show(&self, profile: Option<&str>, format: &str) -> Result<String, AppError> {
        let profile = profile_name(profile)?;
        let Some(settings) = self.store.load(&profile)? else {
            return format_missing_profile(profile.as_str(), format);
        };

        let path = self.store.path_for(&profile);
        let report = ProfileReport {
            profile: profile.to_string(),
            path: path.display().to_string(),
            last_saved: record_modified_at(&path),
            settings,
        };
        if format == "json" {
            format_profile_report_json(&report)
        } else {
            Ok(format_profile_report_text(&report))
        }
    }

    fn handle_list(&self, format: &str) -> Result<String, AppError> {
        let mut entries = Vec::new();
        for profile in self.store.list()? {
            match self.store.load(&profile) {
                Ok(Some(settings)) => {
                    entries.push(ProfileListEntry::from_settings(profile.as_str(), &settings));
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("Skipping unreadable profile '{}': {}", profile, e);
                }
            }
        }
        if format == "json" {
            format_profile_list_json(&entries)
        } else {
            Ok(format_profile_list_text(&entries))
        }
    }

    fn handle_reset(&self, profile: Option<&str>, force: bool) -> Result<String, AppError> {
        let profile = profile_name(profile)?;
        if !force {
            use dialoguer::Confirm;
            let confirmed = Confirm::new()
                .with_prompt(format!(
                    "Discard saved configuration for profile '{}'?",
                    profile
                ))
                .interact()
                .map_err(|e| AppError::Config(format!("Failed to get user input: {}", e)))?;

            if !confirmed {
                return Ok("Reset cancelled".to_string());
            }
        }

        if self.store.delete(&profile)? {
            Ok(format!("Discarded saved configuration for '{}'", profile))
        } else {
            Ok(format!("Profile '{}' has nothing saved", profile))
        }
    }
}

fn profile_name(raw: Option<&str>) -> Result<ProfileName, AppError> {
    match raw {
        Some(name) => ProfileName::new(name),
        None => Ok(ProfileName::default()),
    }
}

fn record_modified_at(path: &std::path::Path) -> Option<String> {
    let modified = std::fs::metadata(path).ok()?.modified().ok()?;
    Some(DateTime::<Utc>::from(modified).to_rfc3339_opts(SecondsFormat::Secs, true))
}
