//! Result type alias for shadowmodel
//!
//! This module provides a convenient Result type alias that uses `ShadowError`
//! as the error type.

use super::errors::ShadowError;

/// Result type alias for shadowmodel operations
///
/// # Examples
///
/// ```
/// use shadowmodel::domain::result::Result;
/// use shadowmodel::domain::errors::ShadowError;
///
/// fn failing_function() -> Result<()> {
///     Err(ShadowError::UnknownDataset("MIMIC".to_string()))
/// }
///
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, ShadowError>;
