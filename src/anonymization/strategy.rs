//! Anonymization strategy catalog
//!
//! Each [`AnonymizationMethod`] is a row in a fixed catalog binding a privacy
//! model to an optional search override. Running a strategy means building a
//! [`StrategyConfig`] from its row and the caller's suppression limit, then
//! handing both to the engine. Adding a strategy means adding a catalog row.

use crate::anonymization::config::{
    PopulationUniquenessModel, PrivacyModelSpec, Region, SearchAlgorithm, SearchSettings,
    StrategyConfig, DEFAULT_SUPPRESSION_LIMIT,
};
use crate::anonymization::engine::AnonymizationEngine;
use crate::domain::{ClassifiedDataset, Result, ShadowError, Table};
use crate::{log_strategy_complete, log_strategy_start};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use std::time::Instant;

/// Named anonymization strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnonymizationMethod {
    /// k = 1: only the search itself, no generalization required
    Identity,
    #[serde(rename = "k2")]
    KAnonymity2,
    #[serde(rename = "k5")]
    KAnonymity5,
    #[serde(rename = "k10")]
    KAnonymity10,
    /// Population uniqueness below 1% under the Pitman estimator
    #[serde(rename = "pitman01")]
    Pitman01,
}

/// Catalog row of a strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrategyProfile {
    pub method: AnonymizationMethod,
    /// Display name
    pub name: &'static str,
    /// Identifier used in configuration files
    pub key: &'static str,
    pub privacy_model: PrivacyModelSpec,
    /// `None` leaves algorithm and step budget to the engine
    pub search: Option<SearchSettings>,
}

const fn search(algorithm: SearchAlgorithm, steps: u32) -> Option<SearchSettings> {
    match NonZeroU32::new(steps) {
        Some(step_limit) => Some(SearchSettings {
            algorithm,
            step_limit,
        }),
        None => panic!("heuristic step limit must be positive"),
    }
}

// Indexed by discriminant; order must follow `AnonymizationMethod` declaration order.
const CATALOG: [StrategyProfile; AnonymizationMethod::ALL.len()] = [
    StrategyProfile {
        method: AnonymizationMethod::Identity,
        name: "Identity",
        key: "identity",
        privacy_model: PrivacyModelSpec::KAnonymity { k: 1 },
        search: search(SearchAlgorithm::BestEffortBottomUp, 1),
    },
    StrategyProfile {
        method: AnonymizationMethod::KAnonymity2,
        name: "2-Anonymity",
        key: "k2",
        privacy_model: PrivacyModelSpec::KAnonymity { k: 2 },
        search: search(SearchAlgorithm::BestEffortTopDown, 1000),
    },
    StrategyProfile {
        method: AnonymizationMethod::KAnonymity5,
        name: "5-Anonymity",
        key: "k5",
        privacy_model: PrivacyModelSpec::KAnonymity { k: 5 },
        search: None,
    },
    StrategyProfile {
        method: AnonymizationMethod::KAnonymity10,
        name: "10-Anonymity",
        key: "k10",
        privacy_model: PrivacyModelSpec::KAnonymity { k: 10 },
        search: None,
    },
    StrategyProfile {
        method: AnonymizationMethod::Pitman01,
        name: "Pitman01",
        key: "pitman01",
        privacy_model: PrivacyModelSpec::PopulationUniqueness {
            threshold: 0.01,
            estimator: PopulationUniquenessModel::Pitman,
            region: Region::Usa,
        },
        search: search(SearchAlgorithm::BestEffortTopDown, 1000),
    },
];

const _: () = {
    let mut i = 0;
    while i < CATALOG.len() {
        assert!(CATALOG[i].method as usize == i, "strategy catalog out of order");
        i += 1;
    }
};

impl AnonymizationMethod {
    /// Every strategy in catalog order
    pub const ALL: [AnonymizationMethod; 5] = [
        AnonymizationMethod::Identity,
        AnonymizationMethod::KAnonymity2,
        AnonymizationMethod::KAnonymity5,
        AnonymizationMethod::KAnonymity10,
        AnonymizationMethod::Pitman01,
    ];

    /// Catalog row of this strategy
    pub fn profile(&self) -> StrategyProfile {
        CATALOG[*self as usize]
    }

    pub fn name(&self) -> &'static str {
        self.profile().name
    }

    /// Build the engine configuration for one call
    ///
    /// # Errors
    ///
    /// Returns [`ShadowError::InvalidSuppressionLimit`] if the limit is not a
    /// fraction in `[0, 1]`.
    pub fn build_config(&self, suppression_limit: f64) -> Result<StrategyConfig> {
        let profile = self.profile();
        StrategyConfig::new(profile.privacy_model, suppression_limit, profile.search)
    }

    /// Anonymize with the default suppression limit of zero
    ///
    /// # Errors
    ///
    /// See [`anonymize_with_suppression`](Self::anonymize_with_suppression).
    pub fn anonymize(
        &self,
        engine: &dyn AnonymizationEngine,
        dataset: &ClassifiedDataset,
    ) -> Result<Table> {
        self.anonymize_with_suppression(engine, dataset, DEFAULT_SUPPRESSION_LIMIT)
    }

    /// Anonymize a classified dataset
    ///
    /// The engine output is returned unmodified. Engine failures are not
    /// retried and no other strategy is attempted.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the suppression limit is invalid
    /// - the engine fails ([`ShadowError::AnonymizationExecution`])
    ///
    /// # Examples
    ///
    /// ```
    /// use shadowmodel::anonymization::{AnonymizationMethod, DryRunEngine};
    /// use shadowmodel::domain::{ClassifiedDataset, DatasetId, Table};
    ///
    /// let dataset = ClassifiedDataset::new(DatasetId::Adult, Table::default(), vec![]);
    /// let output = AnonymizationMethod::KAnonymity5
    ///     .anonymize_with_suppression(&DryRunEngine, &dataset, 0.05)?;
    /// assert_eq!(output, dataset.table);
    /// # Ok::<(), shadowmodel::domain::ShadowError>(())
    /// ```
    pub fn anonymize_with_suppression(
        &self,
        engine: &dyn AnonymizationEngine,
        dataset: &ClassifiedDataset,
        suppression_limit: f64,
    ) -> Result<Table> {
        let config = self.build_config(suppression_limit)?;
        log_strategy_start!(self, dataset.id, suppression_limit);
        tracing::debug!(
            strategy = %self,
            engine = engine.name(),
            config = ?config,
            "Built strategy configuration"
        );

        let start = Instant::now();
        let output = engine
            .run(dataset, config)
            .map_err(|source| ShadowError::AnonymizationExecution {
                strategy: self.name().to_string(),
                source,
            })?;

        log_strategy_complete!(self, dataset.id, output.row_count(), start.elapsed());
        Ok(output)
    }
}

impl fmt::Display for AnonymizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnonymizationMethod {
    type Err = ShadowError;

    /// Accepts display names (`2-Anonymity`) and keys (`k2`), case-insensitively
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim();
        CATALOG
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(wanted) || p.key.eq_ignore_ascii_case(wanted))
            .map(|p| p.method)
            .ok_or_else(|| ShadowError::Configuration(format!("Unknown anonymization strategy: {s}")))
    }
}
