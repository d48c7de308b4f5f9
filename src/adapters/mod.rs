//! External system integrations
//!
//! This module provides adapters for the systems the benchmark talks to:
//!
//! - [`resources`] - Delimited data, attribute configuration and hierarchy files
//! - [`engine`] - The external anonymization engine process
//!
//! # Design Pattern
//!
//! Adapters sit behind traits ([`resources::ResourceLoader`] and
//! [`crate::anonymization::AnonymizationEngine`]) so the classifier and the
//! strategies can be tested with in-memory implementations.
//!
//! ```rust,no_run
//! use shadowmodel::adapters::engine::create_engine;
//! use shadowmodel::adapters::resources::CsvResourceLoader;
//! use shadowmodel::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("shadowmodel.toml")?;
//! let loader = CsvResourceLoader::new(&config.data.root);
//! let engine = create_engine(&config.engine, config.application.dry_run)?;
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod resources;
