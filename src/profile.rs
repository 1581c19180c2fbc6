//! Profile names
//!
//! A profile keys one saved configuration record and one environment. Names
//! become file names in the store, so only ASCII alphanumerics, `-` and `_`
//! are accepted.

use crate::error::AppError;
use std::fmt;

/// Name of the profile used when none is given on the command line.
pub const DEFAULT_PROFILE: &str = "default";

/// A validated profile name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProfileName(String);

impl ProfileName {
    pub fn new(name: &str) -> Result<Self, AppError> {
        if name.is_empty() {
            return Err(AppError::Config("Profile name cannot be empty".to_string()));
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(AppError::Config(format!(
                "Invalid profile name '{}': use letters, digits, '-' or '_'",
                name
            )));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProfileName {
    fn default() -> Self {
        Self(DEFAULT_PROFILE.to_string())
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_names() {
        for name in ["default", "dev", "ci-runner", "team_2"] {
            assert!(ProfileName::new(name).is_ok(), "rejected {}", name);
        }
    }

    #[test]
    fn test_rejects_empty_name() {
        assert!(ProfileName::new("").is_err());
    }

    #[test]
    fn test_rejects_path_like_names() {
        for name in ["a/b", "..", "de.fault", "with space", "tab\there"] {
            assert!(ProfileName::new(name).is_err(), "accepted {}", name);
        }
    }

    #[test]
    fn test_default_profile_name() {
        assert_eq!(ProfileName::default().as_str(), "default");
    }

    #[test]
    fn test_display_matches_input() {
        let name = ProfileName::new("dev").unwrap();
        assert_eq!(name.to_string(), "dev");
    }
}
