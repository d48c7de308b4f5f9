//! Configuration management
//!
//! This module provides TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Configuration files support:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `SHADOW_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use shadowmodel::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("shadowmodel.toml")?;
//!
//! println!("Data root: {}", config.data.root.display());
//! println!("Datasets: {:?}", config.benchmark.datasets);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level and dry-run switch
//! - [`DataConfig`] - Directory holding `data/` and `data_new/`
//! - [`EngineConfig`] - External engine command line
//! - [`BenchmarkConfig`] - Datasets, strategies and sweep parallelism
//! - [`LoggingConfig`] - Rolling JSON log files
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [data]
//! root = "${SHADOW_DATA_DIR}"
//!
//! [engine]
//! command = "java"
//! args = ["-jar", "arx-runner.jar"]
//!
//! [benchmark]
//! datasets = ["ADULT", "TEXAS_10"]
//! strategies = ["identity", "k2", "k5", "k10", "pitman01"]
//! suppression_limit = 0.0
//! max_parallel = 2
//! output_dir = "./out"
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, read_config};
pub use schema::{
    ApplicationConfig, BenchmarkConfig, DataConfig, EngineConfig, LoggingConfig, ShadowConfig,
};
