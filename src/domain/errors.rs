//! Domain error types
//!
//! This module defines the error hierarchy for dataset resolution, attribute
//! classification and strategy execution. Every error surfaces to the caller of
//! `classify`/`anonymize`; nothing here is swallowed or retried.

use std::path::PathBuf;
use thiserror::Error;

/// Boxed cause carried by resource load failures
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type
///
/// This is the primary error type used throughout the crate.
#[derive(Debug, Error)]
pub enum ShadowError {
    /// Dataset identifier outside the closed set
    #[error("Unknown dataset: {0}")]
    UnknownDataset(String),

    /// Attribute kind recognised but not supported by the classification policy
    #[error("Unsupported attribute kind '{kind}' for attribute '{attribute}'")]
    UnsupportedAttributeKind { attribute: String, kind: String },

    /// Attribute kind not recognised at all
    #[error("Invalid attribute type '{kind}' for attribute '{attribute}'")]
    InvalidAttributeType { attribute: String, kind: String },

    /// Attribute configuration row that cannot be interpreted
    #[error("Malformed attribute configuration at row {row}: {reason}")]
    MalformedAttributeConfig { row: usize, reason: String },

    /// Raw data, attribute configuration or hierarchy source unreadable
    #[error("Failed to load {resource} from {}: {source}", path.display())]
    ResourceLoad {
        resource: ResourceKind,
        path: PathBuf,
        #[source]
        source: BoxedCause,
    },

    /// Suppression limit outside `[0, 1]`
    #[error("Invalid suppression limit {0}: must be a fraction in [0, 1]")]
    InvalidSuppressionLimit(f64),

    /// External engine failure
    #[error("Anonymization with strategy '{strategy}' failed: {source}")]
    AnonymizationExecution {
        strategy: String,
        #[source]
        source: EngineError,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors outside of resource loading
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ShadowError {
    /// Builds a [`ShadowError::ResourceLoad`] preserving the original cause
    pub fn resource_load(
        resource: ResourceKind,
        path: impl Into<PathBuf>,
        source: impl Into<BoxedCause>,
    ) -> Self {
        ShadowError::ResourceLoad {
            resource,
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Which resource a load failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Raw row source
    DataSource,
    /// Attribute configuration source
    AttributeConfig,
    /// Generalization hierarchy source
    Hierarchy,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ResourceKind::DataSource => "data source",
            ResourceKind::AttributeConfig => "attribute configuration",
            ResourceKind::Hierarchy => "generalization hierarchy",
        };
        f.write_str(label)
    }
}

/// Anonymization engine errors
///
/// Errors raised across the engine boundary. These don't expose the engine's
/// own types; a strategy wraps them in [`ShadowError::AnonymizationExecution`].
#[derive(Debug, Error)]
pub enum EngineError {
    /// Failed to reach the engine (spawn, pipe or resource I/O)
    #[error("Engine I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Engine ran but reported failure
    #[error("Engine exited with status {status}: {stderr}")]
    Failed { status: i32, stderr: String },

    /// Request could not be encoded for the engine
    #[error("Failed to encode engine request: {0}")]
    Request(String),

    /// Engine output could not be interpreted as a table
    #[error("Invalid engine output: {0}")]
    Output(String),

    /// No transformation satisfied the privacy model
    #[error("No solution found: {0}")]
    NoSolution(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for ShadowError {
    fn from(err: std::io::Error) -> Self {
        ShadowError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ShadowError {
    fn from(err: serde_json::Error) -> Self {
        ShadowError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ShadowError {
    fn from(err: toml::de::Error) -> Self {
        ShadowError::Configuration(format!("TOML parse error: {err}"))
    }
}
