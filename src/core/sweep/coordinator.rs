//! Sweep coordinator - runs every configured (dataset, strategy) pair
//!
//! Each dataset is classified once. Its strategies then run on blocking worker
//! threads, at most `max_parallel` at a time. A shutdown signal stops new pairs
//! from starting; pairs already handed to the engine run to completion.

use crate::adapters::resources::{write_table, CsvResourceLoader};
use crate::anonymization::{AnonymizationEngine, AnonymizationMethod};
use crate::config::ShadowConfig;
use crate::core::classifier::AttributeClassifier;
use crate::core::registry::DATA_DELIMITER;
use crate::core::sweep::summary::{PairOutcome, SweepSummary};
use crate::domain::{ClassifiedDataset, DatasetId, Result, ShadowError};
use crate::log_error_with_context;
use futures::stream::{self, StreamExt};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;

/// File name of the run summary inside the output directory
pub const SUMMARY_FILE: &str = "summary.json";

/// What a sweep runs and where it writes
#[derive(Debug, Clone)]
pub struct SweepSettings {
    pub datasets: Vec<DatasetId>,
    pub strategies: Vec<AnonymizationMethod>,
    pub suppression_limit: f64,
    pub max_parallel: usize,
    pub output_dir: Option<PathBuf>,
    pub dry_run: bool,
}

impl SweepSettings {
    /// Derive settings from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns [`ShadowError::Configuration`] if a dataset or strategy name
    /// does not resolve.
    pub fn from_config(config: &ShadowConfig) -> Result<Self> {
        let benchmark = &config.benchmark;
        Ok(Self {
            datasets: benchmark.dataset_ids().map_err(ShadowError::Configuration)?,
            strategies: benchmark.methods().map_err(ShadowError::Configuration)?,
            suppression_limit: benchmark.suppression_limit,
            max_parallel: benchmark.max_parallel.max(1),
            output_dir: benchmark.output_dir.clone(),
            dry_run: config.application.dry_run,
        })
    }

    /// Path an anonymized table is written to
    pub fn output_path(&self, dataset: DatasetId, strategy: AnonymizationMethod) -> Option<PathBuf> {
        self.output_dir.as_ref().map(|dir| {
            dir.join(dataset.as_str())
                .join(format!("{}.csv", strategy.name()))
        })
    }
}

/// Sweep coordinator
pub struct SweepCoordinator {
    classifier: AttributeClassifier,
    engine: Arc<dyn AnonymizationEngine>,
    settings: SweepSettings,
    shutdown: watch::Receiver<bool>,
}

impl SweepCoordinator {
    pub fn new(
        classifier: AttributeClassifier,
        engine: Arc<dyn AnonymizationEngine>,
        settings: SweepSettings,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            classifier,
            engine,
            settings,
            shutdown,
        }
    }

    /// Build a coordinator reading datasets from `data.root`
    ///
    /// # Errors
    ///
    /// Returns an error if the benchmark section does not resolve
    pub fn from_config(
        config: &ShadowConfig,
        engine: Arc<dyn AnonymizationEngine>,
        shutdown: watch::Receiver<bool>,
    ) -> Result<Self> {
        let loader = Arc::new(CsvResourceLoader::new(&config.data.root));
        Ok(Self::new(
            AttributeClassifier::new(loader),
            engine,
            SweepSettings::from_config(config)?,
            shutdown,
        ))
    }

    pub fn settings(&self) -> &SweepSettings {
        &self.settings
    }

    fn shutdown_requested(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Execute the sweep
    ///
    /// Pair failures are recorded in the summary, not returned. The only
    /// error is failing to write `summary.json`.
    pub async fn execute(&self) -> Result<SweepSummary> {
        let mut summary = SweepSummary::new(self.settings.dry_run, self.settings.suppression_limit);

        tracing::info!(
            run_id = %summary.run_id,
            datasets = self.settings.datasets.len(),
            strategies = self.settings.strategies.len(),
            max_parallel = self.settings.max_parallel,
            engine = self.engine.name(),
            "Starting sweep"
        );

        for &dataset_id in &self.settings.datasets {
            if self.shutdown_requested() {
                tracing::warn!(dataset = %dataset_id, "Shutdown requested, skipping dataset");
                summary.extend(self.all_pairs(dataset_id, PairOutcome::skipped));
                continue;
            }

            let dataset = match self.classify(dataset_id).await {
                Ok(dataset) => Arc::new(dataset),
                Err(e) => {
                    log_error_with_context!(&e, "Failed to classify dataset");
                    let message = e.to_string();
                    summary.extend(
                        self.all_pairs(dataset_id, |d, s| PairOutcome::failed(d, s, message.clone())),
                    );
                    continue;
                }
            };

            let outcomes: Vec<PairOutcome> = stream::iter(self.settings.strategies.iter().copied())
                .map(|strategy| self.run_pair(Arc::clone(&dataset), strategy))
                .buffer_unordered(self.settings.max_parallel.max(1))
                .collect()
                .await;
            summary.extend(outcomes);
        }

        summary.finish();

        if let Some(dir) = &self.settings.output_dir {
            summary.write_json(&dir.join(SUMMARY_FILE))?;
        }

        summary.log_summary();
        Ok(summary)
    }

    fn all_pairs<F>(&self, dataset: DatasetId, outcome: F) -> Vec<PairOutcome>
    where
        F: Fn(DatasetId, AnonymizationMethod) -> PairOutcome,
    {
        self.settings
            .strategies
            .iter()
            .map(|&strategy| outcome(dataset, strategy))
            .collect()
    }

    async fn classify(&self, id: DatasetId) -> Result<ClassifiedDataset> {
        let classifier = self.classifier.clone();
        tokio::task::spawn_blocking(move || classifier.classify(id))
            .await
            .map_err(|e| ShadowError::Io(format!("Classification task failed: {}", e)))?
    }

    async fn run_pair(
        &self,
        dataset: Arc<ClassifiedDataset>,
        strategy: AnonymizationMethod,
    ) -> PairOutcome {
        let dataset_id = dataset.id;

        // Checked when the pair is polled, so queued pairs see a late signal
        if self.shutdown_requested() {
            return PairOutcome::skipped(dataset_id, strategy);
        }

        let engine = Arc::clone(&self.engine);
        let suppression_limit = self.settings.suppression_limit;
        let output_path = self.settings.output_path(dataset_id, strategy);
        let start = Instant::now();

        let result = tokio::task::spawn_blocking(move || -> Result<(usize, Option<PathBuf>)> {
            let table =
                strategy.anonymize_with_suppression(engine.as_ref(), &dataset, suppression_limit)?;
            if let Some(path) = &output_path {
                write_table(path, &table, DATA_DELIMITER)?;
            }
            Ok((table.row_count(), output_path))
        })
        .await;

        let duration_ms = start.elapsed().as_millis() as u64;
        match result {
            Ok(Ok((rows, output))) => {
                PairOutcome::succeeded(dataset_id, strategy, rows, duration_ms, output)
            }
            Ok(Err(e)) => {
                log_error_with_context!(&e, "Anonymization pair failed");
                PairOutcome::failed(dataset_id, strategy, e.to_string())
            }
            Err(e) => {
                tracing::error!(
                    dataset = %dataset_id,
                    strategy = %strategy,
                    error = %e,
                    "Worker task failed"
                );
                PairOutcome::failed(dataset_id, strategy, format!("Worker task failed: {}", e))
            }
        }
    }
}
