//! Header row normalization and validation.

use std::collections::BTreeSet;
use std::path::Path;

use userimport_model::{EMAIL_COLUMN, ImportError, Result};

/// Validated column names of a user file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    columns: Vec<String>,
}

impl CsvHeaders {
    /// Build headers from the raw first row of `path`.
    ///
    /// The row must name an `email` column and must not repeat a column name.
    pub fn parse<'a, I>(raw: I, path: &Path) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let columns: Vec<String> = raw.into_iter().map(normalize_header).collect();
        if !columns.iter().any(|column| column == EMAIL_COLUMN) {
            return Err(ImportError::MissingRequiredColumn {
                column: EMAIL_COLUMN.to_string(),
                path: path.to_path_buf(),
            });
        }
        let mut seen = BTreeSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(ImportError::DuplicateColumn {
                    column: column.clone(),
                    path: path.to_path_buf(),
                });
            }
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Strips a UTF-8 byte-order mark. Column names are otherwise kept verbatim.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &[&str]) -> Result<CsvHeaders> {
        CsvHeaders::parse(raw.iter().copied(), Path::new("users.csv"))
    }

    #[test]
    fn test_headers_with_email() {
        let headers = parse(&["email", "Tranche de salaire", "Ville"]).unwrap();
        assert_eq!(headers.len(), 3);
        assert_eq!(headers.columns(), ["email", "Tranche de salaire", "Ville"]);
    }

    #[test]
    fn test_headers_missing_email() {
        let err = parse(&["mail", "Ville"]).unwrap_err();
        assert!(matches!(
            err,
            ImportError::MissingRequiredColumn { ref column, .. } if column == "email"
        ));
    }

    #[test]
    fn test_headers_email_is_case_sensitive() {
        assert!(parse(&["Email", "Ville"]).is_err());
        assert!(parse(&[" email", "Ville"]).is_err());
    }

    #[test]
    fn test_headers_duplicate_column() {
        let err = parse(&["email", "Ville", "Ville"]).unwrap_err();
        assert!(matches!(
            err,
            ImportError::DuplicateColumn { ref column, .. } if column == "Ville"
        ));
    }

    #[test]
    fn test_normalize_header_strips_bom() {
        assert_eq!(normalize_header("\u{feff}email"), "email");
        assert_eq!(normalize_header(" Ville "), " Ville ");
    }
}
