//! Sweep summary and reporting
//!
//! This module defines structures for tracking and reporting the outcome of
//! every (dataset, strategy) pair in a benchmark sweep.

use crate::anonymization::AnonymizationMethod;
use crate::domain::{DatasetId, Result, ShadowError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Result of one (dataset, strategy) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PairStatus {
    Succeeded {
        rows: usize,
        duration_ms: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        output: Option<PathBuf>,
    },
    Failed {
        error: String,
    },
    /// Never started because shutdown was requested
    Skipped,
}

/// Outcome of one (dataset, strategy) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairOutcome {
    pub dataset: DatasetId,
    pub strategy: AnonymizationMethod,
    #[serde(flatten)]
    pub status: PairStatus,
}

impl PairOutcome {
    pub fn succeeded(
        dataset: DatasetId,
        strategy: AnonymizationMethod,
        rows: usize,
        duration_ms: u64,
        output: Option<PathBuf>,
    ) -> Self {
        Self {
            dataset,
            strategy,
            status: PairStatus::Succeeded {
                rows,
                duration_ms,
                output,
            },
        }
    }

    pub fn failed(dataset: DatasetId, strategy: AnonymizationMethod, error: impl Into<String>) -> Self {
        Self {
            dataset,
            strategy,
            status: PairStatus::Failed {
                error: error.into(),
            },
        }
    }

    pub fn skipped(dataset: DatasetId, strategy: AnonymizationMethod) -> Self {
        Self {
            dataset,
            strategy,
            status: PairStatus::Skipped,
        }
    }
}

/// Summary of a sweep run
#[derive(Debug, Clone, Serialize)]
pub struct SweepSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub dry_run: bool,
    pub suppression_limit: f64,

    /// Ordered by dataset, then strategy catalog order
    pub outcomes: Vec<PairOutcome>,
}

impl SweepSummary {
    /// Create a new empty summary stamped with the current time
    pub fn new(dry_run: bool, suppression_limit: f64) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            finished_at: None,
            dry_run,
            suppression_limit,
            outcomes: Vec::new(),
        }
    }

    /// Record pair outcomes
    pub fn extend(&mut self, outcomes: impl IntoIterator<Item = PairOutcome>) {
        self.outcomes.extend(outcomes);
    }

    /// Stamp the end time and put outcomes in a stable order
    pub fn finish(&mut self) {
        self.outcomes.sort_by_key(|o| (o.dataset, o.strategy));
        self.finished_at = Some(Utc::now());
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.count(|s| matches!(s, PairStatus::Succeeded { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, PairStatus::Failed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, PairStatus::Skipped))
    }

    fn count(&self, pred: impl Fn(&PairStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }

    /// Check if every pair ran and succeeded
    pub fn is_successful(&self) -> bool {
        self.failed() == 0 && self.skipped() == 0
    }

    /// Get success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 100.0;
        }
        (self.succeeded() as f64 / self.total() as f64) * 100.0
    }

    /// Write the summary as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or serialization fails
    pub fn write_json(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| ShadowError::Serialization(e.to_string()))
    }

    /// Log the summary
    pub fn log_summary(&self) {
        tracing::info!(
            run_id = %self.run_id,
            total = self.total(),
            succeeded = self.succeeded(),
            failed = self.failed(),
            skipped = self.skipped(),
            success_rate = format!("{:.2}%", self.success_rate()),
            "Sweep completed"
        );

        for outcome in &self.outcomes {
            if let PairStatus::Failed { error } = &outcome.status {
                tracing::warn!(
                    dataset = %outcome.dataset,
                    strategy = %outcome.strategy,
                    error = %error,
                    "Pair failed"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_creation() {
        let summary = SweepSummary::new(false, 0.0);

        assert_eq!(summary.total(), 0);
        assert!(summary.finished_at.is_none());
        assert!(summary.is_successful());
        assert_eq!(summary.success_rate(), 100.0);
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = SweepSummary::new(true, 0.0);
        summary.extend([
            PairOutcome::succeeded(DatasetId::Adult, AnonymizationMethod::Identity, 10, 3, None),
            PairOutcome::failed(DatasetId::Adult, AnonymizationMethod::KAnonymity2, "boom"),
            PairOutcome::skipped(DatasetId::Texas, AnonymizationMethod::Identity),
            PairOutcome::succeeded(DatasetId::Texas10, AnonymizationMethod::KAnonymity5, 7, 1, None),
        ]);

        assert_eq!(summary.succeeded(), 2);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.skipped(), 1);
        assert_eq!(summary.success_rate(), 50.0);
        assert!(!summary.is_successful());
    }

    #[test]
    fn test_skipped_pairs_are_not_success() {
        let mut summary = SweepSummary::new(false, 0.0);
        summary.extend([PairOutcome::skipped(DatasetId::Adult, AnonymizationMethod::Pitman01)]);
        assert!(!summary.is_successful());
    }

    #[test]
    fn test_finish_orders_outcomes() {
        let mut summary = SweepSummary::new(false, 0.0);
        summary.extend([
            PairOutcome::skipped(DatasetId::Adult, AnonymizationMethod::KAnonymity10),
            PairOutcome::skipped(DatasetId::Texas10, AnonymizationMethod::Identity),
            PairOutcome::skipped(DatasetId::Adult, AnonymizationMethod::Identity),
        ]);
        summary.finish();

        let order: Vec<_> = summary
            .outcomes
            .iter()
            .map(|o| (o.dataset, o.strategy))
            .collect();
        assert_eq!(
            order,
            vec![
                (DatasetId::Texas10, AnonymizationMethod::Identity),
                (DatasetId::Adult, AnonymizationMethod::Identity),
                (DatasetId::Adult, AnonymizationMethod::KAnonymity10),
            ]
        );
        assert!(summary.finished_at.is_some());
    }

    #[test]
    fn test_outcome_json_shape() {
        let outcome =
            PairOutcome::failed(DatasetId::TexasCrafted, AnonymizationMethod::KAnonymity2, "no memory");
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["dataset"], "TEXAS_CRAFTED");
        assert_eq!(json["strategy"], "k2");
        assert_eq!(json["status"], "failed");
        assert_eq!(json["error"], "no memory");
    }

    #[test]
    fn test_write_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("summary.json");

        let mut summary = SweepSummary::new(true, 0.1);
        summary.extend([PairOutcome::succeeded(
            DatasetId::Adult,
            AnonymizationMethod::Identity,
            3,
            0,
            None,
        )]);
        summary.finish();
        summary.write_json(&path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["run_id"], summary.run_id.to_string());
        assert_eq!(written["outcomes"][0]["rows"], 3);
    }
}
