//! Datasets command implementation
//!
//! Lists every registered dataset with the files it resolves to.

use super::EXIT_SUCCESS;
use crate::core::registry;
use clap::Args;

/// Arguments for the datasets command
#[derive(Args, Debug)]
pub struct DatasetsArgs {
    /// Print the resolved resources as JSON
    #[arg(long)]
    pub json: bool,
}

impl DatasetsArgs {
    /// Execute the datasets command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        let resources: Vec<_> = registry::all().collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&resources)?);
            return Ok(EXIT_SUCCESS);
        }

        println!("📚 Registered datasets");
        println!();
        for entry in &resources {
            println!("  {}", entry.id);
            println!("    Data:        {}", entry.data_source);
            println!("    Config:      {}", entry.attribute_config);
            println!(
                "    Hierarchies: {}<attribute>{} (delimiter '{}')",
                entry.hierarchy.prefix,
                entry.hierarchy.suffix,
                char::from(entry.hierarchy_delimiter)
            );
        }
        println!();

        Ok(EXIT_SUCCESS)
    }
}
