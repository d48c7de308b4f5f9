//! CLI command implementations
//!
//! Commands return the process exit code:
//! 0 success, 1 partial failure, 2 configuration error, 5 fatal error.

pub mod anonymize;
pub mod classify;
pub mod datasets;
pub mod sweep;
pub mod validate;

use crate::config::{read_config, ShadowConfig};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_PARTIAL_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;
pub const EXIT_FATAL: i32 = 5;

/// Load the configuration, apply `--dry-run` and validate
///
/// Prints the failure and returns the exit code on error.
fn load_for_run(config_path: &str, dry_run: bool) -> Result<ShadowConfig, i32> {
    let mut config = match read_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            eprintln!("❌ Failed to load configuration file");
            eprintln!("   Error: {e}");
            return Err(EXIT_CONFIG_ERROR);
        }
    };

    if dry_run {
        tracing::info!("Enabling dry-run mode from CLI");
        config.application.dry_run = true;
    }

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Configuration validation failed");
        eprintln!("❌ Configuration validation failed");
        eprintln!("   Error: {e}");
        return Err(EXIT_CONFIG_ERROR);
    }

    Ok(config)
}
