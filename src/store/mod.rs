//! Profile store: durable per-profile settings records.
//!
//! One record per profile, replaced wholesale on save. Callers starting an
//! environment treat any load error as "nothing saved" and continue with
//! defaults; only the read-side commands surface load errors directly.

mod toml_file;

pub use toml_file::TomlProfileStore;

use crate::error::StoreError;
use crate::profile::ProfileName;
use crate::settings::Settings;
use std::path::PathBuf;

/// Storage boundary for saved profile settings.
pub trait ProfileStore {
    /// Load the last saved settings for a profile. `Ok(None)` when nothing
    /// was ever saved; `Err` when a record exists but cannot be read.
    fn load(&self, profile: &ProfileName) -> Result<Option<Settings>, StoreError>;

    /// Replace the saved record for a profile. The replacement is atomic: a
    /// failed save leaves the previous record intact.
    fn save(&self, profile: &ProfileName, settings: &Settings) -> Result<(), StoreError>;

    /// Names of all profiles with a saved record, sorted.
    fn list(&self) -> Result<Vec<ProfileName>, StoreError>;

    /// Discard the saved record for a profile. Returns whether a record
    /// existed.
    fn delete(&self, profile: &ProfileName) -> Result<bool, StoreError>;

    /// Path of the record backing a profile, whether or not it exists yet.
    fn path_for(&self, profile: &ProfileName) -> PathBuf;
}
