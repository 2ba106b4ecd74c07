//! Error types for user import conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a user import conversion.
#[derive(Debug, Error)]
pub enum ImportError {
    // === Source File Errors ===
    /// Source file does not exist.
    #[error("source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// Source file could not be opened or read.
    #[error("failed to read source file {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the source (invalid UTF-8, broken quoting).
    #[error("failed to parse source file {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === Structure Errors ===
    /// Source file has no header row.
    #[error("source file is empty: {path}")]
    SourceEmpty { path: PathBuf },

    /// Header row lacks a required column.
    #[error("source file {path} is missing a \"{column}\" column")]
    MissingRequiredColumn { column: String, path: PathBuf },

    /// Header row names the same column twice.
    #[error("source file {path} has a duplicate \"{column}\" column")]
    DuplicateColumn { column: String, path: PathBuf },

    /// A data row does not have as many values as the header.
    #[error("line {line} of {path} has {actual} values, all lines must have {expected}")]
    RowArityMismatch {
        path: PathBuf,
        line: u64,
        expected: usize,
        actual: usize,
    },

    // === Resolution Errors ===
    /// Email has no entry in the email mapping.
    #[error("no ID found for email {email} (line {line})")]
    UnresolvedEmail { email: String, line: u64 },

    /// Filter or filter value has no entry in the filter mapping.
    #[error("no ID found for value {value} of filter {filter} (line {line})")]
    UnresolvedFilterValue {
        filter: String,
        value: String,
        line: u64,
    },

    // === Mapping Errors ===
    /// Mapping file is missing or unreadable.
    #[error("failed to read mapping file {path}: {source}")]
    MappingRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Mapping file is not valid JSON of the expected shape.
    #[error("invalid mapping file {path}: {reason}")]
    MappingFormat { path: PathBuf, reason: String },
}

impl ImportError {
    /// Classify an I/O failure on the source file.
    pub fn source_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::SourceNotFound { path }
        } else {
            Self::SourceRead { path, source }
        }
    }
}

/// Result type for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ImportError::UnresolvedFilterValue {
            filter: "Tranche de salaire".to_string(),
            value: "31 - 35".to_string(),
            line: 2,
        };
        assert_eq!(
            err.to_string(),
            "no ID found for value 31 - 35 of filter Tranche de salaire (line 2)"
        );
    }

    #[test]
    fn test_source_io_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = ImportError::source_io("/tmp/users.csv", io);
        assert!(matches!(err, ImportError::SourceNotFound { .. }));
        assert_eq!(err.to_string(), "source file not found: /tmp/users.csv");
    }

    #[test]
    fn test_source_io_other() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ImportError::source_io("/tmp/users.csv", io);
        assert!(matches!(err, ImportError::SourceRead { .. }));
    }
}
