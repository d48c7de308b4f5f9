//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - JSON-formatted log files
//! - Configurable log levels
//! - Local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use shadowmodel::logging::init_logging;
//! use shadowmodel::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of an anonymization call
///
/// # Example
///
/// ```no_run
/// use shadowmodel::log_strategy_start;
/// use shadowmodel::anonymization::AnonymizationMethod;
/// use shadowmodel::domain::DatasetId;
///
/// log_strategy_start!(AnonymizationMethod::KAnonymity5, DatasetId::Adult, 0.0);
/// ```
#[macro_export]
macro_rules! log_strategy_start {
    ($method:expr, $dataset:expr, $suppression_limit:expr) => {
        tracing::info!(
            strategy = %$method,
            dataset = %$dataset,
            suppression_limit = $suppression_limit,
            "Starting anonymization"
        );
    };
}

/// Log the completion of an anonymization call
///
/// # Example
///
/// ```no_run
/// use shadowmodel::log_strategy_complete;
/// use shadowmodel::anonymization::AnonymizationMethod;
/// use shadowmodel::domain::DatasetId;
/// use std::time::Duration;
///
/// let rows = 30162;
/// log_strategy_complete!(AnonymizationMethod::Identity, DatasetId::Adult, rows, Duration::from_secs(3));
/// ```
#[macro_export]
macro_rules! log_strategy_complete {
    ($method:expr, $dataset:expr, $rows:expr, $duration:expr) => {
        tracing::info!(
            strategy = %$method,
            dataset = %$dataset,
            rows = $rows,
            duration_ms = $duration.as_millis() as u64,
            "Anonymization completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use shadowmodel::log_error_with_context;
/// use shadowmodel::domain::ShadowError;
///
/// let error = ShadowError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::anonymization::AnonymizationMethod;
    use crate::domain::{DatasetId, ShadowError};
    use std::time::Duration;

    #[test]
    fn test_macros_expand_without_subscriber() {
        log_strategy_start!(AnonymizationMethod::Pitman01, DatasetId::Texas, 0.1);
        log_strategy_complete!(
            AnonymizationMethod::Pitman01,
            DatasetId::Texas,
            12usize,
            Duration::from_millis(5)
        );
        log_error_with_context!(ShadowError::Io("disk".to_string()), "writing output");
    }
}
