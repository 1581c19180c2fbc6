//! Skiff CLI Binary
//!
//! Command-line entry point. Keeps the raw parsed matches around so the
//! route layer can read flag provenance for the start command.

use clap::{CommandFactory, FromArgMatches};
use skiff::cli::{Cli, RunContext};
use skiff::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{debug, error};

fn main() {
    let matches = Cli::command().get_matches();
    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => e.exit(),
    };

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    debug!("Skiff CLI starting");

    let context = match RunContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error initializing context: {}", e);
            eprintln!("{}", skiff::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command, &matches) {
        Ok(output) => {
            debug!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", skiff::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI flags. Flags win over the
/// `SKIFF_LOG`/`SKIFF_LOG_FORMAT` environment variables, which win over
/// defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig {
        color: true,
        ..Default::default()
    };
    if cli.verbose {
        config.level = Some("debug".to_string());
    }
    if let Some(ref level) = cli.log_level {
        config.level = Some(level.clone());
    }
    if let Some(ref format) = cli.log_format {
        config.format = Some(format.clone());
    }
    config
}
