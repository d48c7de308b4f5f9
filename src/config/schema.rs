//! Configuration schema types
//!
//! This module defines the configuration structure that maps to the TOML file.

use crate::anonymization::AnonymizationMethod;
use crate::domain::DatasetId;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration
///
/// Every section is optional; an empty file yields a dry-run-capable default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShadowConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Location of the benchmark datasets
    #[serde(default)]
    pub data: DataConfig,

    /// External anonymization engine
    #[serde(default)]
    pub engine: EngineConfig,

    /// Benchmark sweep settings
    #[serde(default)]
    pub benchmark: BenchmarkConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShadowConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.data.validate()?;
        if !self.application.dry_run {
            self.engine.validate()?;
        }
        self.benchmark.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Dry run mode (build configurations but never invoke the engine)
    #[serde(default)]
    pub dry_run: bool,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            dry_run: false,
        }
    }
}

/// Dataset location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory the registry's relative paths (`data/...`, `data_new/...`) are resolved against
    #[serde(default = "default_data_root")]
    pub root: PathBuf,
}

impl DataConfig {
    fn validate(&self) -> Result<(), String> {
        if self.root.as_os_str().is_empty() {
            return Err("data.root cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            root: default_data_root(),
        }
    }
}

/// External engine process
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Executable that runs the transformation search
    #[serde(default)]
    pub command: String,

    /// Arguments passed before the request is written to stdin
    #[serde(default)]
    pub args: Vec<String>,

    /// Working directory of the engine process
    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

impl EngineConfig {
    fn validate(&self) -> Result<(), String> {
        if self.command.trim().is_empty() {
            return Err(
                "engine.command is required unless application.dry_run is enabled".to_string(),
            );
        }
        Ok(())
    }
}

/// Benchmark sweep settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Datasets to sweep (canonical names, e.g. `ADULT`)
    #[serde(default = "default_datasets")]
    pub datasets: Vec<String>,

    /// Strategies to run on every dataset (`identity`, `k2`, `5-Anonymity`, ...)
    #[serde(default = "default_strategies")]
    pub strategies: Vec<String>,

    /// Fraction of records the engine may suppress
    #[serde(default)]
    pub suppression_limit: f64,

    /// Number of (dataset, strategy) pairs run concurrently
    #[serde(default = "default_max_parallel")]
    pub max_parallel: usize,

    /// Directory receiving anonymized tables and `summary.json`
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl BenchmarkConfig {
    fn validate(&self) -> Result<(), String> {
        if self.datasets.is_empty() {
            return Err("benchmark.datasets cannot be empty".to_string());
        }
        if self.strategies.is_empty() {
            return Err("benchmark.strategies cannot be empty".to_string());
        }
        self.dataset_ids()?;
        self.methods()?;

        if !(0.0..=1.0).contains(&self.suppression_limit) {
            return Err(format!(
                "benchmark.suppression_limit must be between 0 and 1, got {}",
                self.suppression_limit
            ));
        }

        if self.max_parallel == 0 || self.max_parallel > 64 {
            return Err("benchmark.max_parallel must be between 1 and 64".to_string());
        }

        Ok(())
    }

    /// Parsed dataset identifiers, duplicates removed, order kept
    pub fn dataset_ids(&self) -> Result<Vec<DatasetId>, String> {
        let mut ids = Vec::with_capacity(self.datasets.len());
        for name in &self.datasets {
            let id = DatasetId::from_str(name).map_err(|e| e.to_string())?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    /// Parsed strategies, duplicates removed, order kept
    pub fn methods(&self) -> Result<Vec<AnonymizationMethod>, String> {
        let mut methods = Vec::with_capacity(self.strategies.len());
        for name in &self.strategies {
            let method = AnonymizationMethod::from_str(name).map_err(|e| e.to_string())?;
            if !methods.contains(&method) {
                methods.push(method);
            }
        }
        Ok(methods)
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            datasets: default_datasets(),
            strategies: default_strategies(),
            suppression_limit: 0.0,
            max_parallel: default_max_parallel(),
            output_dir: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write JSON logs to rolling files
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory of the log files
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Rotation (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    pub(crate) fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path is required when local_enabled = true".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_data_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_datasets() -> Vec<String> {
    DatasetId::ALL.iter().map(ToString::to_string).collect()
}

fn default_strategies() -> Vec<String> {
    AnonymizationMethod::ALL
        .iter()
        .map(|m| m.profile().key.to_string())
        .collect()
}

fn default_max_parallel() -> usize {
    1
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
