//! Attribute classifier
//!
//! Reads a dataset's attribute configuration and assigns every included
//! attribute a semantic data type and a policy:
//!
//! | kind          | QI    | data type       | policy                                   |
//! |---------------|-------|-----------------|------------------------------------------|
//! | `categorical` | yes   | string          | hierarchy                                |
//! | `categorical` | no    | string          | insensitive                              |
//! | `continuous`  | yes   | decimal `#.#`   | hierarchy + arithmetic-mean aggregation  |
//! | `continuous`  | no    | decimal `#.#`   | insensitive                              |
//! | `ordinal`     | any   | -               | unsupported, classification fails        |
//!
//! Classification is all-or-nothing: the first invalid row aborts the call and
//! nothing classified before it is returned.

use crate::adapters::resources::ResourceLoader;
use crate::core::registry::{self, DatasetResources};
use crate::domain::{
    AttributeConfigRow, AttributeKind, AttributePolicy, ClassifiedAttribute, ClassifiedDataset,
    DataType, DatasetId, MicroAggregation, Result, ShadowError, Table,
};
use std::sync::Arc;

/// Builds [`ClassifiedDataset`]s from registry resources
#[derive(Clone)]
pub struct AttributeClassifier {
    loader: Arc<dyn ResourceLoader>,
}

impl AttributeClassifier {
    pub fn new(loader: Arc<dyn ResourceLoader>) -> Self {
        Self { loader }
    }

    /// Classify a dataset
    ///
    /// Every call reloads the resources and builds a fresh dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - a resource cannot be loaded ([`ShadowError::ResourceLoad`])
    /// - a configuration row is malformed or names a column missing from the data
    /// - an included attribute is `ordinal` ([`ShadowError::UnsupportedAttributeKind`])
    /// - an included attribute has an unknown kind ([`ShadowError::InvalidAttributeType`])
    pub fn classify(&self, id: DatasetId) -> Result<ClassifiedDataset> {
        let resources = registry::resolve(id);
        tracing::info!(dataset = %id, "Classifying dataset");

        let records = self.loader.load_attribute_config(&resources)?;
        let table = self.loader.load_data(&resources)?;

        let mut attributes = Vec::new();
        for (index, fields) in records.iter().enumerate() {
            let row = AttributeConfigRow::from_fields(index, fields)?;
            if !row.included {
                tracing::trace!(dataset = %id, attribute = %row.name, "Skipping excluded attribute");
                continue;
            }

            if table.column_index(&row.name).is_none() {
                return Err(ShadowError::MalformedAttributeConfig {
                    row: index,
                    reason: format!("attribute '{}' is not a column of the data source", row.name),
                });
            }

            let attribute = self.classify_row(&resources, &row)?;
            tracing::debug!(
                dataset = %id,
                attribute = %attribute.name,
                quasi_identifier = attribute.is_quasi_identifier(),
                "Classified attribute"
            );
            attributes.push(attribute);
        }

        let dataset = ClassifiedDataset::new(id, table, attributes);
        log_classification(&dataset);
        Ok(dataset)
    }

    fn classify_row(
        &self,
        resources: &DatasetResources,
        row: &AttributeConfigRow,
    ) -> Result<ClassifiedAttribute> {
        let kind = AttributeKind::parse(&row.kind).ok_or_else(|| ShadowError::InvalidAttributeType {
            attribute: row.name.clone(),
            kind: row.kind.clone(),
        })?;

        let (data_type, aggregation) = match kind {
            AttributeKind::Categorical => (DataType::String, None),
            AttributeKind::Continuous => {
                (DataType::continuous(), Some(MicroAggregation::arithmetic_mean()))
            }
            AttributeKind::Ordinal => {
                return Err(ShadowError::UnsupportedAttributeKind {
                    attribute: row.name.clone(),
                    kind: kind.to_string(),
                })
            }
        };

        let policy = if row.quasi_identifier {
            AttributePolicy::QuasiIdentifying {
                hierarchy: self.loader.load_hierarchy(resources, &row.name)?,
                aggregation,
            }
        } else {
            AttributePolicy::Insensitive
        };

        Ok(ClassifiedAttribute {
            name: row.name.clone(),
            data_type,
            policy,
        })
    }
}

fn log_classification(dataset: &ClassifiedDataset) {
    let Table { header, rows } = &dataset.table;
    tracing::info!(
        dataset = %dataset.id,
        columns = header.len(),
        rows = rows.len(),
        included = dataset.attributes.len(),
        quasi_identifiers = dataset.quasi_identifiers().count(),
        "Dataset classified"
    );
}
