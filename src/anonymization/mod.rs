//! Anonymization module
//!
//! This module binds named anonymization strategies to the privacy-model
//! configuration they hand to the external anonymization engine.
//!
//! # Architecture
//!
//! - **Catalog**: a fixed table of strategies ([`AnonymizationMethod`])
//! - **Configuration**: privacy model, suppression limit and optional search
//!   override ([`StrategyConfig`])
//! - **Engine**: the opaque transformation search ([`AnonymizationEngine`])
//!
//! # Usage
//!
//! ```rust,no_run
//! use shadowmodel::adapters::resources::CsvResourceLoader;
//! use shadowmodel::anonymization::{AnonymizationMethod, DryRunEngine};
//! use shadowmodel::core::AttributeClassifier;
//! use shadowmodel::domain::DatasetId;
//! use std::sync::Arc;
//!
//! # fn example() -> shadowmodel::domain::Result<()> {
//! let classifier = AttributeClassifier::new(Arc::new(CsvResourceLoader::new(".")));
//! let dataset = classifier.classify(DatasetId::Adult)?;
//! let output = AnonymizationMethod::KAnonymity5.anonymize(&DryRunEngine, &dataset)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod strategy;

// Re-export main types
pub use config::{
    PopulationUniquenessModel, PrivacyModelSpec, Region, SearchAlgorithm, SearchSettings,
    StrategyConfig, DEFAULT_SUPPRESSION_LIMIT,
};
pub use engine::{AnonymizationEngine, DryRunEngine};
pub use strategy::{AnonymizationMethod, StrategyProfile};
