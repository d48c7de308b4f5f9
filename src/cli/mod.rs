//! CLI interface and argument parsing
//!
//! This module provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Shadowmodel - anonymization strategies for membership-inference benchmarks
#[derive(Parser, Debug)]
#[command(name = "shadowmodel")]
#[command(version, about, long_about = None)]
#[command(author = "Shadowmodel Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "shadowmodel.toml", env = "SHADOW_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SHADOW_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the benchmark datasets and their resource files
    Datasets(commands::datasets::DatasetsArgs),

    /// Classify a dataset's attributes and print their policies
    Classify(commands::classify::ClassifyArgs),

    /// Anonymize one dataset with one strategy
    Anonymize(commands::anonymize::AnonymizeArgs),

    /// Run every configured (dataset, strategy) pair
    Sweep(commands::sweep::SweepArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),
}
