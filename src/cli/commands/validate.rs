//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the configuration file.

use super::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};
use crate::config::read_config;
use crate::core::registry;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match read_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        if let Err(e) = config.validate() {
            println!("❌ Configuration validation failed");
            println!("   Error: {e}");
            println!();
            return Ok(EXIT_CONFIG_ERROR);
        }

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Dry Run: {}", config.application.dry_run);
        println!("  Data Root: {}", config.data.root.display());
        if config.engine.command.is_empty() {
            println!("  Engine: (none)");
        } else {
            println!(
                "  Engine: {} {}",
                config.engine.command,
                config.engine.args.join(" ")
            );
        }
        println!("  Strategies: {:?}", config.benchmark.strategies);
        println!("  Suppression Limit: {}", config.benchmark.suppression_limit);
        println!("  Max Parallel: {}", config.benchmark.max_parallel);
        match &config.benchmark.output_dir {
            Some(dir) => println!("  Output Directory: {}", dir.display()),
            None => println!("  Output Directory: (not written)"),
        }

        // Names were checked by validate(); report which resources are missing on disk
        let mut missing = 0;
        for id in config.benchmark.dataset_ids().unwrap_or_default() {
            let resources = registry::resolve(id);
            let data = config.data.root.join(resources.data_source_path());
            let attributes = config.data.root.join(resources.attribute_config_path());
            let present = data.is_file() && attributes.is_file();
            if !present {
                missing += 1;
            }
            println!(
                "  Dataset {}: {}",
                id,
                if present { "found" } else { "missing files" }
            );
        }
        println!();

        if missing > 0 {
            println!("⚠️  {missing} dataset(s) have missing files under the data root");
        }

        Ok(EXIT_SUCCESS)
    }
}
