//! Domain models and types for shadowmodel.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Dataset identifiers** ([`DatasetId`]) forming the closed benchmark set
//! - **Attribute types** ([`AttributeConfigRow`], [`ClassifiedAttribute`], [`AttributePolicy`])
//! - **Tables** ([`Table`], [`ClassifiedDataset`])
//! - **Error types** ([`ShadowError`], [`EngineError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ShadowError>`]:
//!
//! ```rust
//! use shadowmodel::domain::{DatasetId, Result};
//!
//! fn example() -> Result<DatasetId> {
//!     // Errors are automatically converted using the ? operator
//!     let id: DatasetId = "ADULT".parse()?;
//!     Ok(id)
//! }
//! # assert!(example().is_ok());
//! ```

pub mod attribute;
pub mod dataset;
pub mod errors;
pub mod result;
pub mod table;

// Re-export commonly used types for convenience
pub use attribute::{
    AggregationFunction, AttributeConfigRow, AttributeKind, AttributePolicy, ClassifiedAttribute,
    DataType, Hierarchy, Locale, MicroAggregation,
};
pub use dataset::{ClassifiedDataset, DatasetId};
pub use errors::{EngineError, ResourceKind, ShadowError};
pub use result::Result;
pub use table::Table;
