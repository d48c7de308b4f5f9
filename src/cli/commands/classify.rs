//! Classify command implementation
//!
//! Classifies one dataset and prints the policy assigned to each included
//! attribute.

use super::{EXIT_CONFIG_ERROR, EXIT_FATAL, EXIT_SUCCESS};
use crate::adapters::resources::CsvResourceLoader;
use crate::config::read_config;
use crate::core::AttributeClassifier;
use crate::domain::{AttributePolicy, ClassifiedAttribute, DataType, DatasetId};
use clap::Args;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// Arguments for the classify command
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Dataset name (e.g. ADULT, TEXAS_10)
    pub dataset: String,

    /// Directory holding `data/` and `data_new/` (defaults to `data.root` from the configuration)
    #[arg(long)]
    pub data_root: Option<PathBuf>,

    /// Print the attribute policies as JSON
    #[arg(long)]
    pub json: bool,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let id = match DatasetId::from_str(&self.dataset) {
            Ok(id) => id,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let root = match &self.data_root {
            Some(root) => root.clone(),
            None => match read_config(config_path) {
                Ok(config) => config.data.root,
                Err(e) => {
                    eprintln!("❌ Failed to load configuration file");
                    eprintln!("   Error: {e}");
                    return Ok(EXIT_CONFIG_ERROR);
                }
            },
        };

        tracing::info!(dataset = %id, root = %root.display(), "Classifying dataset");
        let classifier = AttributeClassifier::new(Arc::new(CsvResourceLoader::new(root)));
        let dataset = match tokio::task::spawn_blocking(move || classifier.classify(id)).await? {
            Ok(d) => d,
            Err(e) => {
                tracing::error!(dataset = %id, error = %e, "Classification failed");
                eprintln!("❌ Classification of {id} failed");
                eprintln!("   Error: {e}");
                return Ok(EXIT_FATAL);
            }
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&dataset.attributes)?);
            return Ok(EXIT_SUCCESS);
        }

        println!(
            "🔍 {} ({} rows, {} columns)",
            id,
            dataset.table.row_count(),
            dataset.table.column_count()
        );
        println!();
        for attribute in &dataset.attributes {
            println!("  {:<24} {}", attribute.name, describe(attribute));
        }
        println!();
        println!(
            "  {} quasi-identifying, {} insensitive",
            dataset.quasi_identifiers().count(),
            dataset.insensitive_attributes().count()
        );

        Ok(EXIT_SUCCESS)
    }
}

/// One-line description of an attribute's type and policy
fn describe(attribute: &ClassifiedAttribute) -> String {
    let data_type = match &attribute.data_type {
        DataType::String => "string".to_string(),
        DataType::Decimal { format, .. } => format!("decimal({format})"),
    };

    match &attribute.policy {
        AttributePolicy::Insensitive => format!("{data_type}, insensitive"),
        AttributePolicy::QuasiIdentifying {
            hierarchy,
            aggregation,
        } => {
            let mut text = format!(
                "{data_type}, quasi-identifying, hierarchy depth {}",
                hierarchy.depth()
            );
            if aggregation.is_some() {
                text.push_str(", mean micro-aggregation");
            }
            text
        }
    }
}
