//! Schema errors raised by table normalization.

use std::fmt;

use thiserror::Error;

/// Which input table a schema error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Products,
    Resources,
    Dataset,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Products => "products",
            Self::Resources => "resources",
            Self::Dataset => "dataset",
        };
        f.write_str(name)
    }
}

/// A required column is missing from an input table.
///
/// Fatal to the call that raised it; all missing columns are reported at
/// once. Stages are pure, so a schema error never leaves partially
/// mutated caller state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("{table} table missing required column(s): {}", columns.join(", "))]
    MissingColumns {
        table: TableKind,
        columns: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_every_missing_column() {
        let error = SchemaError::MissingColumns {
            table: TableKind::Products,
            columns: vec!["product".to_owned(), "quantity".to_owned()],
        };
        assert_eq!(
            error.to_string(),
            "products table missing required column(s): product, quantity"
        );
    }
}
