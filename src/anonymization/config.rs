//! Privacy model and strategy configuration
//!
//! A [`StrategyConfig`] is built fresh for every anonymization call and handed
//! to the engine by value. Its fields are private so it cannot change once built.

use crate::domain::{Result, ShadowError};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// Suppression limit applied when the caller does not supply one
pub const DEFAULT_SUPPRESSION_LIMIT: f64 = 0.0;

/// Estimator used by the population-uniqueness privacy model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopulationUniquenessModel {
    Pitman,
    Zayatz,
    Snb,
    Dankar,
}

/// Population the sample is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Usa,
}

/// Privacy model the engine must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrivacyModelSpec {
    /// Every quasi-identifier combination matches at least `k` records
    KAnonymity { k: u32 },
    /// Estimated fraction of population-unique records stays below `threshold`
    PopulationUniqueness {
        threshold: f64,
        estimator: PopulationUniquenessModel,
        region: Region,
    },
}

impl PrivacyModelSpec {
    /// `k` of a k-anonymity model
    pub fn k(&self) -> Option<u32> {
        match self {
            PrivacyModelSpec::KAnonymity { k } => Some(*k),
            PrivacyModelSpec::PopulationUniqueness { .. } => None,
        }
    }
}

/// Direction of the heuristic lattice search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    BestEffortBottomUp,
    BestEffortTopDown,
}

/// Search algorithm override with its heuristic step budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSettings {
    pub algorithm: SearchAlgorithm,
    pub step_limit: NonZeroU32,
}

/// Configuration passed to the engine for one anonymization call
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrategyConfig {
    privacy_model: PrivacyModelSpec,
    suppression_limit: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    algorithm: Option<SearchAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    heuristic_step_limit: Option<NonZeroU32>,
}

impl StrategyConfig {
    /// Create a configuration; `search = None` leaves the engine defaults
    ///
    /// # Errors
    ///
    /// Returns [`ShadowError::InvalidSuppressionLimit`] if the limit is NaN or
    /// outside `[0, 1]`.
    pub fn new(
        privacy_model: PrivacyModelSpec,
        suppression_limit: f64,
        search: Option<SearchSettings>,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&suppression_limit) {
            return Err(ShadowError::InvalidSuppressionLimit(suppression_limit));
        }

        Ok(Self {
            privacy_model,
            suppression_limit,
            algorithm: search.map(|s| s.algorithm),
            heuristic_step_limit: search.map(|s| s.step_limit),
        })
    }

    pub fn privacy_model(&self) -> &PrivacyModelSpec {
        &self.privacy_model
    }

    pub fn suppression_limit(&self) -> f64 {
        self.suppression_limit
    }

    /// `None` means the engine's default algorithm
    pub fn algorithm(&self) -> Option<SearchAlgorithm> {
        self.algorithm
    }

    /// `None` means the engine's default step budget
    pub fn heuristic_step_limit(&self) -> Option<NonZeroU32> {
        self.heuristic_step_limit
    }
}
