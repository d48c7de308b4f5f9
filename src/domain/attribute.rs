//! Attribute configuration and classification types
//!
//! An [`AttributeConfigRow`] is one line of a dataset's attribute configuration
//! source. Classification turns the included rows into [`ClassifiedAttribute`]s,
//! each carrying a semantic data type and an [`AttributePolicy`].

use super::errors::ShadowError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal marking a flag as set in the attribute configuration source
pub const FLAG_TRUE: &str = "TRUE";

/// Number of leading fields read from an attribute configuration row
pub const CONFIG_ROW_FIELDS: usize = 4;

/// Semantic kind of an attribute as declared in the configuration source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Categorical,
    Continuous,
    Ordinal,
}

impl AttributeKind {
    /// Parses the configuration token (`categorical`, `continuous`, `ordinal`)
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "categorical" => Some(AttributeKind::Categorical),
            "continuous" => Some(AttributeKind::Continuous),
            "ordinal" => Some(AttributeKind::Ordinal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKind::Categorical => "categorical",
            AttributeKind::Continuous => "continuous",
            AttributeKind::Ordinal => "ordinal",
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of an attribute configuration source
///
/// The kind is kept as the raw token: it is only interpreted for included
/// attributes, so an excluded row with an unrecognised kind is still valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeConfigRow {
    /// Column name in the raw dataset
    pub name: String,

    /// Raw kind token
    pub kind: String,

    /// Whether the attribute receives a type and policy at all
    pub included: bool,

    /// Whether the attribute is a quasi-identifier
    pub quasi_identifier: bool,
}

impl AttributeConfigRow {
    /// Builds a row from the fields of a configuration record
    ///
    /// Flags are set only by the exact literal `TRUE`. Fields past the fourth
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ShadowError::MalformedAttributeConfig`] if the record has fewer
    /// than four fields or an empty attribute name.
    pub fn from_fields<S: AsRef<str>>(row: usize, fields: &[S]) -> Result<Self, ShadowError> {
        if fields.len() < CONFIG_ROW_FIELDS {
            return Err(ShadowError::MalformedAttributeConfig {
                row,
                reason: format!(
                    "expected {CONFIG_ROW_FIELDS} fields, found {}",
                    fields.len()
                ),
            });
        }

        let name = fields[0].as_ref();
        if name.is_empty() {
            return Err(ShadowError::MalformedAttributeConfig {
                row,
                reason: "attribute name is empty".to_string(),
            });
        }

        Ok(Self {
            name: name.to_string(),
            kind: fields[1].as_ref().to_string(),
            included: fields[2].as_ref() == FLAG_TRUE,
            quasi_identifier: fields[3].as_ref() == FLAG_TRUE,
        })
    }
}

/// Display locale for decimal values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en-US")]
    EnUs,
}

/// Semantic data type assigned to an included attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DataType {
    String,
    Decimal {
        /// Display pattern, e.g. `#.#`
        format: String,
        locale: Locale,
    },
}

impl DataType {
    /// Decimal with one fractional display digit, US locale
    pub fn continuous() -> Self {
        DataType::Decimal {
            format: "#.#".to_string(),
            locale: Locale::EnUs,
        }
    }
}

/// Generalization hierarchy for a quasi-identifier
///
/// Each row maps one original value (first column) to increasingly coarse
/// generalizations. The rows are handed to the engine uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hierarchy {
    pub rows: Vec<Vec<String>>,
}

impl Hierarchy {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Number of generalization levels, including the original values
    pub fn depth(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Aggregation used by the engine to produce representative values for
/// generalized ranges of continuous attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationFunction {
    ArithmeticMean,
}

/// Micro-aggregation attached to a continuous quasi-identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicroAggregation {
    pub function: AggregationFunction,
    pub ignore_missing_data: bool,
}

impl MicroAggregation {
    pub fn arithmetic_mean() -> Self {
        Self {
            function: AggregationFunction::ArithmeticMean,
            ignore_missing_data: true,
        }
    }
}

/// How the engine must treat an included attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum AttributePolicy {
    /// Passed through, never generalized or suppressed
    Insensitive,
    /// Subject to generalization and suppression
    QuasiIdentifying {
        hierarchy: Hierarchy,
        #[serde(skip_serializing_if = "Option::is_none")]
        aggregation: Option<MicroAggregation>,
    },
}

/// An included attribute with its resolved type and policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedAttribute {
    pub name: String,
    pub data_type: DataType,
    pub policy: AttributePolicy,
}

impl ClassifiedAttribute {
    pub fn is_quasi_identifier(&self) -> bool {
        matches!(self.policy, AttributePolicy::QuasiIdentifying { .. })
    }

    pub fn hierarchy(&self) -> Option<&Hierarchy> {
        match &self.policy {
            AttributePolicy::QuasiIdentifying { hierarchy, .. } => Some(hierarchy),
            AttributePolicy::Insensitive => None,
        }
    }

    pub fn aggregation(&self) -> Option<&MicroAggregation> {
        match &self.policy {
            AttributePolicy::QuasiIdentifying { aggregation, .. } => aggregation.as_ref(),
            AttributePolicy::Insensitive => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_fields() {
        let row = AttributeConfigRow::from_fields(0, &["age", "continuous", "TRUE", "TRUE"]).unwrap();
        assert_eq!(row.name, "age");
        assert_eq!(row.kind, "continuous");
        assert!(row.included);
        assert!(row.quasi_identifier);
    }

    #[test]
    fn test_flags_require_exact_literal() {
        let row = AttributeConfigRow::from_fields(0, &["sex", "categorical", "true", "True"]).unwrap();
        assert!(!row.included);
        assert!(!row.quasi_identifier);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let row =
            AttributeConfigRow::from_fields(2, &["zip", "categorical", "TRUE", "FALSE", "note"]).unwrap();
        assert_eq!(row.name, "zip");
        assert!(!row.quasi_identifier);
    }

    #[test]
    fn test_short_row_is_malformed() {
        let err = AttributeConfigRow::from_fields(7, &["age", "continuous", "TRUE"]).unwrap_err();
        assert!(matches!(err, ShadowError::MalformedAttributeConfig { row: 7, .. }));
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(AttributeKind::parse("categorical"), Some(AttributeKind::Categorical));
        assert_eq!(AttributeKind::parse("continuous"), Some(AttributeKind::Continuous));
        assert_eq!(AttributeKind::parse("ordinal"), Some(AttributeKind::Ordinal));
        assert_eq!(AttributeKind::parse("Continuous"), None);
        assert_eq!(AttributeKind::parse("date"), None);
    }

    #[test]
    fn test_hierarchy_depth() {
        let hierarchy = Hierarchy::new(vec![
            vec!["17".to_string(), "15-19".to_string(), "*".to_string()],
            vec!["18".to_string(), "15-19".to_string(), "*".to_string()],
        ]);
        assert_eq!(hierarchy.depth(), 3);
        assert_eq!(Hierarchy::new(vec![]).depth(), 0);
    }
}
