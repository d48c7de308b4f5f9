// Shadowmodel - Anonymization strategies for membership-inference benchmarks
// Copyright (c) 2025 Shadowmodel Contributors
// Licensed under the MIT License

//! # Shadowmodel
//!
//! Prepares benchmark datasets for an external anonymization engine and runs
//! a fixed catalog of anonymization strategies against them, so that shadow
//! models can be trained on raw and anonymized versions of the same data.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Resolving** a dataset name to its data, attribute configuration and
//!   generalization hierarchy files
//! - **Classifying** attributes as insensitive or quasi-identifying, with
//!   hierarchies and micro-aggregation for continuous values
//! - **Anonymizing** a classified dataset with a named strategy
//!   (k-anonymity, population uniqueness)
//! - **Sweeping** every configured (dataset, strategy) pair
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Dataset registry, attribute classification and sweeps
//! - [`anonymization`] - Strategy catalog, privacy models and the engine boundary
//! - [`adapters`] - Delimited-file resources and the engine process
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shadowmodel::adapters::resources::CsvResourceLoader;
//! use shadowmodel::anonymization::{AnonymizationMethod, DryRunEngine};
//! use shadowmodel::core::AttributeClassifier;
//! use shadowmodel::domain::DatasetId;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let classifier = AttributeClassifier::new(Arc::new(CsvResourceLoader::new(".")));
//!     let dataset = classifier.classify(DatasetId::Adult)?;
//!
//!     for method in AnonymizationMethod::ALL {
//!         let output = method.anonymize(&DryRunEngine, &dataset)?;
//!         println!("{}: {} rows", method, output.row_count());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Library functions return [`domain::Result`], whose error type is
//! [`domain::ShadowError`]. Engine failures arrive wrapped as
//! [`domain::ShadowError::AnonymizationExecution`] with the
//! [`domain::EngineError`] as their source.
//!
//! ## Logging
//!
//! Structured logging uses the `tracing` crate; see [`logging::init_logging`].

pub mod adapters;
pub mod anonymization;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
