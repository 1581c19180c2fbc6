//! Logging System
//!
//! Structured logging via the `tracing` crate. Everything goes to stderr so
//! stdout stays machine-readable for `--format json` output.

use crate::error::AppError;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration.
///
/// Precedence (highest to lowest): CLI flags, `SKIFF_LOG` /
/// `SKIFF_LOG_FORMAT` environment variables, defaults (info, text, color).
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Log level or filter directive from CLI flags
    pub level: Option<String>,

    /// Output format from CLI flags: json, text
    pub format: Option<String>,

    /// Colored output (text format only)
    pub color: bool,
}

/// Initialize the logging system.
pub fn init_logging(config: &LoggingConfig) -> Result<(), AppError> {
    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;

    let base_subscriber = Registry::default().with(filter);

    if format == "json" {
        base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}

/// Build the level filter. An explicit CLI level wins over the `SKIFF_LOG`
/// environment variable.
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, AppError> {
    if let Some(ref level) = config.level {
        return level
            .parse::<EnvFilter>()
            .map_err(|e| AppError::Config(format!("Invalid log level '{}': {}", level, e)));
    }

    if let Ok(filter) = EnvFilter::try_from_env("SKIFF_LOG") {
        return Ok(filter);
    }

    Ok(EnvFilter::new("info"))
}

/// Determine the output format, CLI flag first, then `SKIFF_LOG_FORMAT`.
fn determine_format(config: &LoggingConfig) -> Result<String, AppError> {
    if let Some(ref format) = config.format {
        if format != "json" && format != "text" {
            return Err(AppError::Config(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                format
            )));
        }
        return Ok(format.clone());
    }

    if let Ok(format) = std::env::var("SKIFF_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    Ok("text".to_string())
}
