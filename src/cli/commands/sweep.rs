//! Sweep command implementation
//!
//! Runs every configured (dataset, strategy) pair.

use super::{load_for_run, EXIT_FATAL, EXIT_PARTIAL_FAILURE, EXIT_SUCCESS};
use crate::adapters::engine::create_engine;
use crate::core::sweep::{PairStatus, SweepCoordinator};
use clap::Args;
use tokio::sync::watch;

/// Arguments for the sweep command
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Build and log every configuration without invoking the engine
    #[arg(long)]
    pub dry_run: bool,
}

impl SweepArgs {
    /// Execute the sweep command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting sweep command");

        let config = match load_for_run(config_path, self.dry_run) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        if config.application.dry_run {
            tracing::info!("Dry run mode enabled - the engine will not be invoked");
            println!("🔍 DRY RUN MODE - the engine will not be invoked");
            println!();
        }

        let engine = create_engine(&config.engine, config.application.dry_run)?;
        let coordinator = SweepCoordinator::from_config(&config, engine, shutdown_signal)?;

        println!("🚀 Starting sweep...");
        println!();

        let summary = match coordinator.execute().await {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Sweep failed");
                eprintln!("Sweep failed: {e}");
                return Ok(EXIT_FATAL);
            }
        };

        println!("📊 Sweep Summary:");
        println!("  Run ID: {}", summary.run_id);
        println!("  Pairs: {}", summary.total());
        println!("  Succeeded: {}", summary.succeeded());
        println!("  Failed: {}", summary.failed());
        println!("  Skipped: {}", summary.skipped());
        println!("  Success Rate: {:.2}%", summary.success_rate());
        println!();

        for outcome in &summary.outcomes {
            let line = match &outcome.status {
                PairStatus::Succeeded {
                    rows, duration_ms, ..
                } => format!("✅ {rows} rows, {duration_ms} ms"),
                PairStatus::Failed { error } => format!("❌ {error}"),
                PairStatus::Skipped => "⏭️  skipped".to_string(),
            };
            println!(
                "  {:<20} {:<14} {}",
                outcome.dataset.as_str(),
                outcome.strategy.name(),
                line
            );
        }
        println!();

        if summary.is_successful() {
            println!("✅ Sweep completed successfully");
            Ok(EXIT_SUCCESS)
        } else {
            println!("⚠️  Sweep completed with failures or skipped pairs");
            Ok(EXIT_PARTIAL_FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::EXIT_CONFIG_ERROR;

    #[tokio::test]
    async fn test_missing_config_is_config_error() {
        let (_tx, rx) = watch::channel(false);
        let args = SweepArgs { dry_run: true };
        let code = args
            .execute("/nonexistent/shadowmodel.toml", rx)
            .await
            .unwrap();
        assert_eq!(code, EXIT_CONFIG_ERROR);
    }
}
