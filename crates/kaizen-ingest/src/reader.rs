//! CSV file reading into raw tables.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use kaizen_model::{CellValue, RawRow, RawTable};

use crate::error::{IngestError, Result};

/// Read a delimited file into a [`RawTable`].
///
/// Headers come from the first record; empty cells become
/// [`CellValue::Missing`]. A file with a header but no data rows is a
/// valid (empty) table; a file without a header row is an error.
pub fn read_raw_table(path: &Path) -> Result<RawTable> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers().map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let columns: Vec<String> = headers.iter().map(str::to_owned).collect();

    let mut table = RawTable::new(columns.clone());
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let mut row = RawRow::new();
        for (index, column) in columns.iter().enumerate() {
            let cell = record
                .get(index)
                .map_or(CellValue::Missing, CellValue::from);
            let _ = row.insert(column.clone(), cell);
        }
        table.push_row(row);
    }

    debug!(
        path = %path.display(),
        rows = table.len(),
        columns = table.columns.len(),
        "loaded raw table"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn reads_header_and_rows() {
        let file = write_csv("product,quantity,price\nA,1000,50\nB,400,\n");
        let table = read_raw_table(file.path()).expect("read");
        assert_eq!(table.columns, vec!["product", "quantity", "price"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(&table.rows[0], "price"), Some("50"));
        assert_eq!(table.cell(&table.rows[1], "price"), None);
    }

    #[test]
    fn header_only_file_is_an_empty_table() {
        let file = write_csv("resource,quantity,unit_cost\n");
        let table = read_raw_table(file.path()).expect("read");
        assert!(table.is_empty());
        assert_eq!(table.columns.len(), 3);
    }

    #[test]
    fn short_records_pad_with_missing() {
        let file = write_csv("product,quantity,price\nA,10\n");
        let table = read_raw_table(file.path()).expect("read");
        assert_eq!(table.cell(&table.rows[0], "price"), None);
    }

    #[test]
    fn missing_file_is_reported() {
        let error = read_raw_table(Path::new("/nonexistent/products.csv")).unwrap_err();
        assert!(matches!(error, IngestError::FileNotFound { .. }));
    }

    #[test]
    fn whitespace_cells_are_trimmed() {
        let file = write_csv("product,quantity\n  A  ,  10 \n");
        let table = read_raw_table(file.path()).expect("read");
        assert_eq!(table.cell(&table.rows[0], "product"), Some("A"));
        assert_eq!(table.cell(&table.rows[0], "quantity"), Some("10"));
    }
}
