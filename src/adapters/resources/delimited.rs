//! Delimited-file resource loader
//!
//! Reads data, attribute configuration and hierarchy sources with the `csv`
//! crate, using the delimiter and charset the registry assigns to each dataset.

use super::traits::ResourceLoader;
use crate::core::registry::{Charset, DatasetResources};
use crate::domain::{Hierarchy, ResourceKind, Result, ShadowError, Table};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Loads dataset resources from delimited files below a data root
#[derive(Debug, Clone)]
pub struct CsvResourceLoader {
    root: PathBuf,
}

impl CsvResourceLoader {
    /// Create a loader resolving registry paths against `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_records(
        &self,
        resource: ResourceKind,
        relative: &Path,
        delimiter: u8,
        charset: Charset,
    ) -> Result<Vec<Vec<String>>> {
        let path = self.root.join(relative);
        tracing::debug!(path = %path.display(), %resource, "Reading delimited source");

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_path(&path)
            .map_err(|e| ShadowError::resource_load(resource, &path, e))?;

        let mut records = Vec::new();
        for record in reader.byte_records() {
            let record = record.map_err(|e| ShadowError::resource_load(resource, &path, e))?;
            let fields = record
                .iter()
                .map(|field| decode(field, charset))
                .collect::<std::result::Result<Vec<_>, _>>()
                .map_err(|e| ShadowError::resource_load(resource, &path, e))?;
            records.push(fields);
        }

        Ok(records)
    }
}

impl ResourceLoader for CsvResourceLoader {
    fn load_data(&self, resources: &DatasetResources) -> Result<Table> {
        let mut records = self
            .read_records(
                ResourceKind::DataSource,
                resources.data_source_path(),
                resources.delimiter,
                resources.charset,
            )?
            .into_iter();

        let header = records.next().ok_or_else(|| {
            ShadowError::resource_load(
                ResourceKind::DataSource,
                self.root.join(resources.data_source),
                "data source has no header row",
            )
        })?;

        Ok(Table::new(header, records.collect()))
    }

    fn load_attribute_config(&self, resources: &DatasetResources) -> Result<Vec<Vec<String>>> {
        self.read_records(
            ResourceKind::AttributeConfig,
            resources.attribute_config_path(),
            resources.delimiter,
            resources.charset,
        )
    }

    fn load_hierarchy(&self, resources: &DatasetResources, attribute: &str) -> Result<Hierarchy> {
        let rows = self.read_records(
            ResourceKind::Hierarchy,
            &resources.hierarchy_path(attribute),
            resources.hierarchy_delimiter,
            resources.charset,
        )?;
        Ok(Hierarchy::new(rows))
    }
}

fn decode(field: &[u8], charset: Charset) -> std::result::Result<String, std::str::Utf8Error> {
    match charset {
        Charset::Utf8 => std::str::from_utf8(field).map(str::to_owned),
        Charset::Latin1 => Ok(field.iter().map(|&b| char::from(b)).collect()),
    }
}

/// Write a table as delimited text, header first
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_table(path: &Path, table: &Table, delimiter: u8) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = BufWriter::new(File::create(path)?);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_writer(file);

    let csv_err = |e: csv::Error| ShadowError::Io(format!("{}: {e}", path.display()));
    writer.write_record(&table.header).map_err(csv_err)?;
    for row in &table.rows {
        writer.write_record(row).map_err(csv_err)?;
    }
    writer.flush()?;

    Ok(())
}
