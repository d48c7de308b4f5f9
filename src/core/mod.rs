//! Core benchmark logic
//!
//! # Modules
//!
//! - [`registry`] - Static table of datasets and their resource locations
//! - [`classifier`] - Attribute classification from configuration files
//! - [`sweep`] - Runs strategies across datasets and summarizes the results
//!
//! # Workflow
//!
//! 1. **Resolve**: look up a dataset's resources in the registry
//! 2. **Classify**: read the attribute configuration, data and hierarchies
//! 3. **Anonymize**: hand the classified dataset to a strategy and the engine
//! 4. **Report**: collect per-pair outcomes into a sweep summary
//!
//! # Example
//!
//! ```rust,no_run
//! use shadowmodel::adapters::engine::create_engine;
//! use shadowmodel::config::load_config;
//! use shadowmodel::core::sweep::SweepCoordinator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("shadowmodel.toml")?;
//! let engine = create_engine(&config.engine, config.application.dry_run)?;
//!
//! let (_shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
//! let coordinator = SweepCoordinator::from_config(&config, engine, shutdown_rx)?;
//!
//! let summary = coordinator.execute().await?;
//! println!("Succeeded: {}", summary.succeeded());
//! println!("Failed: {}", summary.failed());
//! # Ok(())
//! # }
//! ```

pub mod classifier;
pub mod registry;
pub mod sweep;

pub use classifier::AttributeClassifier;
pub use registry::DatasetResources;
