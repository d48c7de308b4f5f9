//! Anonymization engine boundary
//!
//! The engine performs the actual transformation search. It is treated as an
//! opaque collaborator: it receives a classified dataset plus a
//! [`StrategyConfig`] and returns an anonymized [`Table`] or an [`EngineError`].
//! Nothing is assumed about its runtime or memory behaviour beyond "eventually
//! returns or fails".

use crate::anonymization::config::StrategyConfig;
use crate::domain::{ClassifiedDataset, EngineError, Table};

/// External anonymization engine
///
/// Implementations must be safe to call concurrently for independent
/// datasets. An engine that is not reentrant has to serialize internally.
pub trait AnonymizationEngine: Send + Sync {
    /// Run a transformation search over `dataset`
    ///
    /// # Errors
    ///
    /// Returns an [`EngineError`] if the engine cannot be reached or reports
    /// a failure.
    fn run(&self, dataset: &ClassifiedDataset, config: StrategyConfig) -> Result<Table, EngineError>;

    /// Short label used in logs
    fn name(&self) -> &'static str;
}

/// Engine that returns the input rows unchanged
///
/// Used for dry runs: the strategy still builds and logs its configuration,
/// but no transformation search takes place.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunEngine;

impl AnonymizationEngine for DryRunEngine {
    fn run(&self, dataset: &ClassifiedDataset, config: StrategyConfig) -> Result<Table, EngineError> {
        tracing::info!(
            dataset = %dataset.id,
            config = ?config,
            quasi_identifiers = dataset.quasi_identifiers().count(),
            "Dry run: skipping engine invocation"
        );
        Ok(dataset.table.clone())
    }

    fn name(&self) -> &'static str {
        "dry-run"
    }
}
