//! Core data structures for dossier representation
//!
//! A dossier is kept as flat paragraph text plus its tables. Section lookup
//! works on the joined text, structured data (profile, positions, education,
//! grant details) comes from the tables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One table row keyed by the header row above it
pub type Record = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dossier {
    /// Body paragraphs in document order, normalized, empty ones included
    pub paragraphs: Vec<String>,
    pub tables: Vec<DossierTable>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DossierTable {
    pub rows: Vec<Vec<TableCell>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TableCell {
    /// Cell paragraphs joined with `\n`
    pub text: String,
    /// Every non-blank run of the first paragraph is bold
    pub bold: bool,
}

impl TableCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}

impl Dossier {
    /// The document text: paragraphs joined with `\n`, so an empty paragraph
    /// shows up as a blank line between blocks.
    pub fn text(&self) -> String {
        self.paragraphs.join("\n")
    }

    /// First table whose header row has a column named `column`
    pub fn table_with_column(&self, column: &str) -> Option<&DossierTable> {
        self.tables
            .iter()
            .find(|table| table.header().is_some_and(|h| h.iter().any(|c| c == column)))
    }

    /// Tables holding at least one `key: value` cell with this key, in document order
    pub fn tables_with_key<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a DossierTable> {
        self.tables
            .iter()
            .filter(move |table| table.key_values().contains_key(key))
    }

    /// Merged records of the profile table (the one with a `Last Name` column)
    pub fn profile(&self) -> Record {
        let mut profile = Record::new();
        if let Some(table) = self.table_with_column("Last Name") {
            for record in table.records() {
                profile.extend(record);
            }
        }
        profile
    }

    /// Full name from the profile table, e.g. `Jane Q. Doe`
    pub fn full_name(&self) -> Option<String> {
        let profile = self.profile();
        let first = profile
            .get("First Name and Initial")
            .map(|s| s.trim())
            .unwrap_or("");
        let last = profile.get("Last Name").map(|s| s.trim()).unwrap_or("");

        let name = [first, last]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        (!name.is_empty()).then_some(name)
    }
}

impl DossierTable {
    fn is_header_row(row: &[TableCell]) -> bool {
        row.iter().any(|cell| !cell.text.trim().is_empty()) && row.iter().all(|cell| cell.bold)
    }

    /// Text of the first bold row, if any
    pub fn header(&self) -> Option<Vec<String>> {
        self.rows
            .iter()
            .find(|row| Self::is_header_row(row))
            .map(|row| row.iter().map(|cell| cell.text.clone()).collect())
    }

    /// Rows after a bold header row, keyed by that header.
    ///
    /// A later bold row replaces the keys for the rows that follow it. Rows
    /// before the first header are skipped.
    pub fn records(&self) -> Vec<Record> {
        let mut keys: Option<Vec<String>> = None;
        let mut records = Vec::new();

        for row in &self.rows {
            if Self::is_header_row(row) {
                keys = Some(row.iter().map(|cell| cell.text.clone()).collect());
                continue;
            }

            if let Some(keys) = &keys {
                let record = keys
                    .iter()
                    .cloned()
                    .zip(row.iter().map(|cell| cell.text.clone()))
                    .collect();
                records.push(record);
            }
        }

        records
    }

    /// `key: value` cells as a map; other non-empty cells land under `Data`
    pub fn key_values(&self) -> Record {
        let mut values = Record::new();

        for cell in self.rows.iter().flatten() {
            let text = cell.text.trim();
            if let Some((key, value)) = text.split_once(':') {
                values.insert(key.trim().to_string(), value.trim().to_string());
            } else if !text.is_empty() {
                values.insert("Data".to_string(), text.to_string());
            }
        }

        values
    }
}

/// Look up a field by exact key, falling back to the first key that starts
/// with `key`. Dossier headers often carry extra lines below the label.
pub fn field<'a>(record: &'a Record, key: &str) -> &'a str {
    record
        .get(key)
        .or_else(|| {
            record
                .iter()
                .find(|(k, _)| k.starts_with(key))
                .map(|(_, v)| v)
        })
        .map(|s| s.as_str())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, bool)]) -> Vec<TableCell> {
        cells
            .iter()
            .map(|(text, bold)| TableCell::new(*text).with_bold(*bold))
            .collect()
    }

    #[test]
    fn test_records_follow_bold_header() {
        let table = DossierTable {
            rows: vec![
                row(&[("intro", false), ("", false)]),
                row(&[("Last Name", true), ("First Name and Initial", true)]),
                row(&[("Doe", false), ("Jane Q.", false)]),
            ],
        };

        let records = table.records();
        assert_eq!(records.len(), 1, "rows before the header are skipped");
        assert_eq!(records[0]["Last Name"], "Doe");
        assert_eq!(records[0]["First Name and Initial"], "Jane Q.");
    }

    #[test]
    fn test_empty_row_is_not_a_header() {
        let table = DossierTable {
            rows: vec![
                row(&[("Degree", true)]),
                row(&[("", true)]),
                row(&[("Ph.D., 2010", false)]),
            ],
        };

        let records = table.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["Degree"], "Ph.D., 2010");
    }

    #[test]
    fn test_key_values_and_data_cells() {
        let table = DossierTable {
            rows: vec![row(&[
                ("Award Amount: $10,000", false),
                ("Notes", false),
                ("Agency: NSF: CMMI", false),
            ])],
        };

        let values = table.key_values();
        assert_eq!(values["Award Amount"], "$10,000");
        assert_eq!(values["Agency"], "NSF: CMMI");
        assert_eq!(values["Data"], "Notes");
    }

    #[test]
    fn test_field_prefix_lookup() {
        let mut record = Record::new();
        record.insert(
            "Previous Employers with City/State\nIncluding U.S. Military".to_string(),
            "Acme Corp".to_string(),
        );
        assert_eq!(field(&record, "Previous Employers"), "Acme Corp");
        assert_eq!(field(&record, "Dates"), "");
    }

    #[test]
    fn test_full_name_from_profile() {
        let dossier = Dossier {
            paragraphs: vec![],
            tables: vec![DossierTable {
                rows: vec![
                    row(&[("First Name and Initial", true), ("Last Name", true)]),
                    row(&[("Jane Q.", false), ("Doe", false)]),
                ],
            }],
        };
        assert_eq!(dossier.full_name().as_deref(), Some("Jane Q. Doe"));
    }
}
