//! Dataset registry
//!
//! Maps every [`DatasetId`] to its raw data source, attribute configuration
//! source and hierarchy sources. The mapping is compile-time data: variants
//! derived from a base dataset point at the base's [`BaseResources`] instead of
//! repeating its paths. No I/O happens here; paths are relative to the data
//! root the file adapter is configured with.

use crate::domain::{DatasetId, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Field delimiter of raw data sources and attribute configuration sources
pub const DATA_DELIMITER: u8 = b';';

/// Character encoding of a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Charset {
    /// Platform default
    Utf8,
    Latin1,
}

/// Resources shared by a base dataset and the variants crafted from it
#[derive(Debug, PartialEq, Eq)]
pub struct BaseResources {
    pub attribute_config: &'static str,
    pub hierarchy: HierarchyTemplate,
    pub hierarchy_delimiter: u8,
}

/// Path template for per-attribute hierarchy files: `<prefix><attribute><suffix>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HierarchyTemplate {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

impl HierarchyTemplate {
    pub fn path_for(&self, attribute: &str) -> PathBuf {
        PathBuf::from(format!("{}{}{}", self.prefix, attribute, self.suffix))
    }
}

struct RegistryEntry {
    id: DatasetId,
    data_source: &'static str,
    base: &'static BaseResources,
}

const ADULT: BaseResources = BaseResources {
    attribute_config: "data/adult.cfg",
    hierarchy: HierarchyTemplate {
        prefix: "data/adult_hierarchy_",
        suffix: ".csv",
    },
    hierarchy_delimiter: b';',
};

const ADULT_FULL: BaseResources = BaseResources {
    attribute_config: "data_new/adult_full.cfg",
    hierarchy: HierarchyTemplate {
        prefix: "data_new/adult_full_hierarchy_",
        suffix: ".csv",
    },
    hierarchy_delimiter: b',',
};

const TEXAS_10: BaseResources = BaseResources {
    attribute_config: "data/texas_10.cfg",
    hierarchy: HierarchyTemplate {
        prefix: "data/texas_hierarchy_",
        suffix: ".csv",
    },
    hierarchy_delimiter: b';',
};

const TEXAS: BaseResources = BaseResources {
    attribute_config: "data_new/texas_NHS.cfg",
    hierarchy: HierarchyTemplate {
        prefix: "data_new/texas_hierarchy_",
        suffix: ".csv",
    },
    hierarchy_delimiter: b';',
};

// Indexed by discriminant; order must follow `DatasetId` declaration order.
const REGISTRY: [RegistryEntry; DatasetId::ALL.len()] = [
    RegistryEntry {
        id: DatasetId::Texas10,
        data_source: "data/texas_10.csv",
        base: &TEXAS_10,
    },
    RegistryEntry {
        id: DatasetId::Texas,
        data_source: "data_new/texas.csv",
        base: &TEXAS,
    },
    RegistryEntry {
        id: DatasetId::TexasCrafted,
        data_source: "data_new/texas_crafted.csv",
        base: &TEXAS,
    },
    RegistryEntry {
        id: DatasetId::Adult,
        data_source: "data/adult.csv",
        base: &ADULT,
    },
    RegistryEntry {
        id: DatasetId::AdultFull,
        data_source: "data_new/adult_full.csv",
        base: &ADULT_FULL,
    },
    RegistryEntry {
        id: DatasetId::AdultFullCrafted,
        data_source: "data_new/adult_full_crafted.csv",
        base: &ADULT_FULL,
    },
];

const _: () = {
    let mut i = 0;
    while i < REGISTRY.len() {
        assert!(REGISTRY[i].id as usize == i, "registry out of order");
        i += 1;
    }
};

/// Resolved resources of one dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetResources {
    pub id: DatasetId,
    pub data_source: &'static str,
    pub attribute_config: &'static str,
    pub hierarchy: HierarchyTemplate,
    /// Delimiter of the data source and the attribute configuration
    pub delimiter: u8,
    pub hierarchy_delimiter: u8,
    pub charset: Charset,
}

impl DatasetResources {
    pub fn data_source_path(&self) -> &Path {
        Path::new(self.data_source)
    }

    pub fn attribute_config_path(&self) -> &Path {
        Path::new(self.attribute_config)
    }

    /// Hierarchy source of one attribute
    pub fn hierarchy_path(&self, attribute: &str) -> PathBuf {
        self.hierarchy.path_for(attribute)
    }
}

/// Resolves the resources of a dataset
///
/// # Examples
///
/// ```
/// use shadowmodel::core::registry;
/// use shadowmodel::domain::DatasetId;
///
/// let adult = registry::resolve(DatasetId::Adult);
/// assert_eq!(adult.data_source, "data/adult.csv");
/// assert_eq!(adult.delimiter, b';');
/// ```
pub fn resolve(id: DatasetId) -> DatasetResources {
    let entry = &REGISTRY[id as usize];
    DatasetResources {
        id: entry.id,
        data_source: entry.data_source,
        attribute_config: entry.base.attribute_config,
        hierarchy: entry.base.hierarchy,
        delimiter: DATA_DELIMITER,
        hierarchy_delimiter: entry.base.hierarchy_delimiter,
        charset: Charset::Utf8,
    }
}

/// Resolves a dataset given by name
///
/// # Errors
///
/// Returns [`crate::domain::ShadowError::UnknownDataset`] if the name is not
/// part of the closed dataset set.
pub fn resolve_name(name: &str) -> Result<DatasetResources> {
    DatasetId::from_str(name).map(resolve)
}

/// Resources of every dataset in declaration order
pub fn all() -> impl Iterator<Item = DatasetResources> {
    DatasetId::ALL.into_iter().map(resolve)
}
