//! Error types for the skiff CLI and its profile store.

use thiserror::Error;

/// Profile store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid profile config {path:?}: {message}")]
    Corrupt {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to serialize profile config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("No user configuration directory available")]
    NoConfigDir,
}

/// VM driver errors
#[derive(Debug, Error)]
pub enum ProvisionError {
    #[error("Invalid mount (expected path or path:w): {0}")]
    InvalidMount(String),

    #[error("Driver not found: {0}")]
    DriverNotFound(String),

    #[error("Driver exited unsuccessfully: {0}")]
    DriverFailed(String),

    #[error("Failed to encode start payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Driver I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level command errors
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Provisioner error: {0}")]
    Provision(#[from] ProvisionError),

    #[error("Environment is running but its configuration could not be saved: {0}")]
    SaveFailed(StoreError),
}
