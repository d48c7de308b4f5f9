//! Resource loading traits
//!
//! This module defines the row-iteration collaborator the attribute classifier
//! reads datasets through. The classifier never touches files directly.

use crate::core::registry::DatasetResources;
use crate::domain::{Hierarchy, Result, Table};

/// Loader for the three resources a dataset is built from
///
/// Implementations report unreadable sources as
/// [`crate::domain::ShadowError::ResourceLoad`], keeping the original cause.
pub trait ResourceLoader: Send + Sync {
    /// Loads the raw data source; the first row is the header
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or is empty.
    fn load_data(&self, resources: &DatasetResources) -> Result<Table>;

    /// Loads the attribute configuration source as raw records
    ///
    /// No header row is assumed: every record describes one attribute.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read.
    fn load_attribute_config(&self, resources: &DatasetResources) -> Result<Vec<Vec<String>>>;

    /// Loads the generalization hierarchy of one attribute
    ///
    /// # Errors
    ///
    /// Returns an error if the hierarchy source cannot be read.
    fn load_hierarchy(&self, resources: &DatasetResources, attribute: &str) -> Result<Hierarchy>;
}
