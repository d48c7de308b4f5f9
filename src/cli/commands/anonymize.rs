//! Anonymize command implementation
//!
//! Runs a single strategy against a single dataset.

use super::{load_for_run, EXIT_CONFIG_ERROR, EXIT_FATAL, EXIT_PARTIAL_FAILURE, EXIT_SUCCESS};
use crate::adapters::engine::create_engine;
use crate::adapters::resources::{write_table, CsvResourceLoader};
use crate::anonymization::AnonymizationMethod;
use crate::core::registry::DATA_DELIMITER;
use crate::core::sweep::SweepSettings;
use crate::core::AttributeClassifier;
use crate::domain::{DatasetId, ShadowError};
use clap::Args;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

/// Arguments for the anonymize command
#[derive(Args, Debug)]
pub struct AnonymizeArgs {
    /// Dataset name (e.g. ADULT, TEXAS_10)
    pub dataset: String,

    /// Strategy name or key (e.g. identity, k5, 10-Anonymity, pitman01)
    pub strategy: String,

    /// Fraction of records the engine may suppress (defaults to benchmark.suppression_limit)
    #[arg(long, value_name = "FRACTION")]
    pub suppression_limit: Option<f64>,

    /// Where to write the anonymized table (defaults to benchmark.output_dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Build and log the configuration without invoking the engine
    #[arg(long)]
    pub dry_run: bool,
}

impl AnonymizeArgs {
    /// Execute the anonymize command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = match load_for_run(config_path, self.dry_run) {
            Ok(c) => c,
            Err(code) => return Ok(code),
        };

        let (id, method) = match (
            DatasetId::from_str(&self.dataset),
            AnonymizationMethod::from_str(&self.strategy),
        ) {
            (Ok(id), Ok(method)) => (id, method),
            (Err(e), _) | (_, Err(e)) => {
                eprintln!("❌ {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let suppression_limit = self
            .suppression_limit
            .unwrap_or(config.benchmark.suppression_limit);
        let output_path = match &self.output {
            Some(path) => Some(path.clone()),
            None => SweepSettings::from_config(&config)?.output_path(id, method),
        };

        if config.application.dry_run {
            println!("🔍 DRY RUN MODE - the engine will not be invoked");
            println!();
        }

        let engine = create_engine(&config.engine, config.application.dry_run)?;
        let classifier =
            AttributeClassifier::new(Arc::new(CsvResourceLoader::new(&config.data.root)));

        println!("🚀 Anonymizing {id} with {method}...");
        let start = Instant::now();
        let task_output = output_path.clone();
        let result = tokio::task::spawn_blocking(move || {
            let dataset = classifier.classify(id)?;
            let table =
                method.anonymize_with_suppression(engine.as_ref(), &dataset, suppression_limit)?;
            if let Some(path) = &task_output {
                write_table(path, &table, DATA_DELIMITER)?;
            }
            Ok::<_, ShadowError>(table.row_count())
        })
        .await?;

        match result {
            Ok(rows) => {
                println!("✅ {rows} rows in {:.2}s", start.elapsed().as_secs_f64());
                if let Some(path) = output_path {
                    println!("   Written to {}", path.display());
                }
                Ok(EXIT_SUCCESS)
            }
            Err(e) => {
                tracing::error!(
                    dataset = %id,
                    strategy = %method,
                    error = %e,
                    "Anonymization failed"
                );
                eprintln!("❌ Anonymization failed");
                eprintln!("   Error: {e}");
                Ok(exit_code_for(&e))
            }
        }
    }
}

fn exit_code_for(error: &ShadowError) -> i32 {
    match error {
        ShadowError::InvalidSuppressionLimit(_) | ShadowError::Configuration(_) => {
            EXIT_CONFIG_ERROR
        }
        ShadowError::AnonymizationExecution { .. } => EXIT_PARTIAL_FAILURE,
        _ => EXIT_FATAL,
    }
}
