//! Tabular data exchanged with the anonymization engine

use serde::{Deserialize, Serialize};

/// A header plus an ordered sequence of string rows
///
/// This is both the raw data attached to a classified dataset and the
/// anonymized output returned by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { header, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Position of a column in the header
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// Iterates the values of one column; missing cells are skipped
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str> + 'a> {
        let index = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .filter_map(move |row| row.get(index).map(String::as_str)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["age".to_string(), "sex".to_string()],
            vec![
                vec!["39".to_string(), "Male".to_string()],
                vec!["50".to_string(), "Female".to_string()],
            ],
        )
    }

    #[test]
    fn test_dimensions() {
        let table = sample();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_column_lookup() {
        let table = sample();
        assert_eq!(table.column_index("sex"), Some(1));
        let ages: Vec<&str> = table.column("age").unwrap().collect();
        assert_eq!(ages, vec!["39", "50"]);
        assert!(table.column("zip").is_none());
    }
}
