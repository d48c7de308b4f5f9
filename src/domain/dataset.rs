//! Benchmark dataset identifiers
//!
//! The set of datasets is closed: every variant maps to exactly one entry in the
//! dataset registry. Text parsing is the only way to produce an unknown identifier.

use super::attribute::ClassifiedAttribute;
use super::errors::ShadowError;
use super::table::Table;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Benchmark dataset variant
///
/// # Examples
///
/// ```
/// use shadowmodel::domain::DatasetId;
/// use std::str::FromStr;
///
/// let id = DatasetId::from_str("texas-crafted").unwrap();
/// assert_eq!(id, DatasetId::TexasCrafted);
/// assert_eq!(id.to_string(), "TEXAS_CRAFTED");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DatasetId {
    /// Texas hospital discharge sample (10 attributes)
    #[serde(rename = "TEXAS_10")]
    Texas10,
    /// Texas hospital discharge data
    Texas,
    /// Texas data with crafted target records
    TexasCrafted,
    /// UCI Adult
    Adult,
    /// UCI Adult, all attributes
    AdultFull,
    /// UCI Adult, all attributes, with crafted target records
    AdultFullCrafted,
}

impl DatasetId {
    /// Every dataset in the closed set, in declaration order
    pub const ALL: [DatasetId; 6] = [
        DatasetId::Texas10,
        DatasetId::Texas,
        DatasetId::TexasCrafted,
        DatasetId::Adult,
        DatasetId::AdultFull,
        DatasetId::AdultFullCrafted,
    ];

    /// Canonical identifier, as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetId::Texas10 => "TEXAS_10",
            DatasetId::Texas => "TEXAS",
            DatasetId::TexasCrafted => "TEXAS_CRAFTED",
            DatasetId::Adult => "ADULT",
            DatasetId::AdultFull => "ADULT_FULL",
            DatasetId::AdultFullCrafted => "ADULT_FULL_CRAFTED",
        }
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetId {
    type Err = ShadowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").to_uppercase();
        DatasetId::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| ShadowError::UnknownDataset(s.to_string()))
    }
}

/// A dataset whose included attributes carry a type and policy
///
/// Built from scratch on every classification; owned by the caller and never
/// mutated by strategies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedDataset {
    pub id: DatasetId,

    /// Raw rows as read from the data source; excluded columns stay in place
    pub table: Table,

    /// Included attributes in configuration order
    pub attributes: Vec<ClassifiedAttribute>,
}

impl ClassifiedDataset {
    pub fn new(id: DatasetId, table: Table, attributes: Vec<ClassifiedAttribute>) -> Self {
        Self {
            id,
            table,
            attributes,
        }
    }

    /// Looks up the policy of an included attribute
    pub fn attribute(&self, name: &str) -> Option<&ClassifiedAttribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn quasi_identifiers(&self) -> impl Iterator<Item = &ClassifiedAttribute> {
        self.attributes.iter().filter(|a| a.is_quasi_identifier())
    }

    pub fn insensitive_attributes(&self) -> impl Iterator<Item = &ClassifiedAttribute> {
        self.attributes.iter().filter(|a| !a.is_quasi_identifier())
    }
}
