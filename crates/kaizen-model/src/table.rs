//! Raw string-celled tables, the shape data has before normalization.

use std::collections::BTreeMap;

/// A single cell of a raw table.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// The cell's text, or `None` for missing/blank cells.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) if !text.trim().is_empty() => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        if value.trim().is_empty() {
            Self::Missing
        } else {
            Self::Text(value.to_owned())
        }
    }
}

/// One raw row: cells keyed by column name (case-sensitive).
pub type RawRow = BTreeMap<String, CellValue>;

/// An untyped table as delivered by the ingest boundary or built
/// programmatically by a caller.
///
/// Column order is preserved for display purposes; computation never
/// depends on it. Required-column lookup is case-sensitive exact match.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from `(column, cell)` pairs per row.
    ///
    /// Columns are taken in first-seen order across all rows; cells absent
    /// from a row are treated as missing.
    pub fn from_rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (S, CellValue)>,
        S: Into<String>,
    {
        let mut columns: Vec<String> = Vec::new();
        let mut built = Vec::new();
        for row in rows {
            let mut cells = RawRow::new();
            for (column, cell) in row {
                let column = column.into();
                if !columns.contains(&column) {
                    columns.push(column.clone());
                }
                let _ = cells.insert(column, cell);
            }
            built.push(cells);
        }
        Self {
            columns,
            rows: built,
        }
    }

    pub fn push_row(&mut self, row: RawRow) {
        self.rows.push(row);
    }

    /// Whether the table declares the given column (exact match).
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    /// The text of a cell, or `None` when the cell is missing or blank.
    pub fn cell<'a>(&self, row: &'a RawRow, column: &str) -> Option<&'a str> {
        row.get(column).and_then(CellValue::as_text)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_missing() {
        assert_eq!(CellValue::from("   "), CellValue::Missing);
        assert_eq!(CellValue::from(""), CellValue::Missing);
        assert_eq!(CellValue::from("x"), CellValue::Text("x".to_owned()));
    }

    #[test]
    fn from_rows_collects_columns_in_first_seen_order() {
        let table = RawTable::from_rows(vec![
            vec![("product", CellValue::from("A")), ("quantity", CellValue::from("10"))],
            vec![("quantity", CellValue::from("5")), ("price", CellValue::from("2"))],
        ]);
        assert_eq!(table.columns, vec!["product", "quantity", "price"]);
        assert_eq!(table.len(), 2);
        assert!(table.has_column("price"));
        assert!(!table.has_column("Price"));
    }

    #[test]
    fn cell_lookup_skips_missing() {
        let table = RawTable::from_rows(vec![vec![
            ("product", CellValue::from("A")),
            ("price", CellValue::Missing),
        ]]);
        let row = &table.rows[0];
        assert_eq!(table.cell(row, "product"), Some("A"));
        assert_eq!(table.cell(row, "price"), None);
        assert_eq!(table.cell(row, "absent"), None);
    }
}
