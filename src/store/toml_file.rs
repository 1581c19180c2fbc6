//! TOML file store: one `<profile>.toml` per profile under the user config
//! directory.

use super::ProfileStore;
use crate::error::StoreError;
use crate::profile::ProfileName;
use crate::settings::Settings;
use directories::ProjectDirs;
use std::ffi::OsStr;
use std::fs;
use std::path::PathBuf;

pub struct TomlProfileStore {
    root: PathBuf,
}

impl TomlProfileStore {
    /// Store rooted at the platform config directory
    /// (`$XDG_CONFIG_HOME/skiff/profiles` on Linux).
    pub fn new() -> Result<Self, StoreError> {
        let dirs = ProjectDirs::from("", "", "skiff").ok_or(StoreError::NoConfigDir)?;
        Ok(Self {
            root: dirs.config_dir().join("profiles"),
        })
    }

    /// Store rooted at an explicit directory. Used by tests.
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }
}

impl ProfileStore for TomlProfileStore {
    fn load(&self, profile: &ProfileName) -> Result<Option<Settings>, StoreError> {
        let path = self.path_for(profile);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(e)),
        };
        let settings = toml::from_str(&content).map_err(|e| StoreError::Corrupt {
            path,
            message: e.to_string(),
        })?;
        Ok(Some(settings))
    }

    fn save(&self, profile: &ProfileName, settings: &Settings) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;
        let path = self.path_for(profile);
        let content = toml::to_string_pretty(settings)?;

        // Temp file + rename so a failed write never clobbers the record.
        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::Io(e)
        })?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<ProfileName>, StoreError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };

        let mut profiles = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Unreadable entry in {}: {}", self.root.display(), e);
                    continue;
                }
            };
            let path = entry.path();
            if path.extension() != Some(OsStr::new("toml")) {
                continue;
            }
            let stem = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem,
                None => {
                    tracing::warn!("Invalid profile filename: {:?}", path);
                    continue;
                }
            };
            match ProfileName::new(stem) {
                Ok(name) => profiles.push(name),
                Err(_) => {
                    tracing::warn!("Skipping record with invalid profile name: {:?}", path);
                }
            }
        }
        profiles.sort();
        Ok(profiles)
    }

    fn delete(&self, profile: &ProfileName) -> Result<bool, StoreError> {
        let path = self.path_for(profile);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn path_for(&self, profile: &ProfileName) -> PathBuf {
        self.root.join(format!("{}.toml", profile.as_str()))
    }
}
