//! Engine factory
//!
//! Selects the engine implementation from configuration.

use super::process::ProcessEngine;
use crate::anonymization::{AnonymizationEngine, DryRunEngine};
use crate::config::EngineConfig;
use crate::domain::{Result, ShadowError};
use std::sync::Arc;

/// Create the engine a run should use
///
/// A dry run always gets the [`DryRunEngine`], whatever the engine section says.
///
/// # Errors
///
/// Returns [`ShadowError::Configuration`] if no command is configured for a
/// real run.
pub fn create_engine(config: &EngineConfig, dry_run: bool) -> Result<Arc<dyn AnonymizationEngine>> {
    if dry_run {
        tracing::info!("Dry run: using pass-through engine");
        return Ok(Arc::new(DryRunEngine));
    }

    if config.command.trim().is_empty() {
        return Err(ShadowError::Configuration(
            "engine.command must be set to run the anonymization engine".to_string(),
        ));
    }

    tracing::info!(command = %config.command, args = ?config.args, "Creating process engine");
    Ok(Arc::new(ProcessEngine::new(
        config.command.clone(),
        config.args.clone(),
        config.working_dir.clone(),
    )))
}
