//! Dataset resource adapters
//!
//! This module provides a trait-based abstraction over the files a dataset is
//! made of, and the delimited-file implementation used by the CLI.

pub mod delimited;
pub mod traits;

pub use delimited::{write_table, CsvResourceLoader};
pub use traits::ResourceLoader;
