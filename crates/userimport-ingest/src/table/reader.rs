//! Delimited file reading with header and row shape validation.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use userimport_model::{ImportError, Result, UserRecord};

use super::header::CsvHeaders;
use super::lines::{Segment, split_blank_lines};

/// Field delimiter of user files unless configured otherwise.
pub const DEFAULT_DELIMITER: u8 = b';';

/// Options for reading a user file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Single-byte field delimiter.
    pub delimiter: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl CsvOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// One data row as read from the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// 1-based line where the row starts.
    pub line: u64,
    pub values: Vec<String>,
}

/// Header and data rows of a user file. Every row has the header's arity.
#[derive(Debug, Clone)]
pub struct UserTable {
    pub headers: CsvHeaders,
    pub rows: Vec<RawRow>,
}

impl UserTable {
    /// Rows paired with their column names, in file order.
    pub fn records(&self) -> impl Iterator<Item = UserRecord> + '_ {
        self.rows.iter().map(|row| {
            UserRecord::from_columns(row.line, self.headers.columns(), row.values.iter().cloned())
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read and validate a user file.
///
/// The first row is the header. Fails on an empty file, a header without an
/// `email` column, or any row whose value count differs from the header's.
/// A blank line is a row holding one empty value. The file is read whole and
/// closed before parsing.
pub fn read_user_table(path: &Path, options: &CsvOptions) -> Result<UserTable> {
    let bytes = fs::read(path).map_err(|e| ImportError::source_io(path, e))?;
    let mut lines = read_raw_rows(&bytes, options.delimiter)
        .map_err(|e| csv_error(path, e))?
        .into_iter();

    let Some(first) = lines.next() else {
        return Err(ImportError::SourceEmpty {
            path: path.to_path_buf(),
        });
    };
    let headers = CsvHeaders::parse(first.values.iter().map(String::as_str), path)?;

    let mut rows = Vec::new();
    for row in lines {
        if row.values.len() != headers.len() {
            return Err(ImportError::RowArityMismatch {
                path: path.to_path_buf(),
                line: row.line,
                expected: headers.len(),
                actual: row.values.len(),
            });
        }
        rows.push(row);
    }

    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read user table"
    );
    Ok(UserTable { headers, rows })
}

/// Every line of the source, header included, as rows in file order.
fn read_raw_rows(bytes: &[u8], delimiter: u8) -> std::result::Result<Vec<RawRow>, csv::Error> {
    let mut rows = Vec::new();
    for segment in split_blank_lines(bytes, delimiter) {
        match segment {
            Segment::Blank { line } => rows.push(RawRow {
                line,
                values: vec![String::new()],
            }),
            Segment::Records { first_line, bytes } => {
                let mut reader = ReaderBuilder::new()
                    .has_headers(false)
                    .delimiter(delimiter)
                    .flexible(true)
                    .from_reader(bytes);
                for record in reader.records() {
                    let record = record?;
                    let offset = record.position().map_or(1, csv::Position::line);
                    rows.push(RawRow {
                        line: first_line + offset.saturating_sub(1),
                        values: record.iter().map(str::to_string).collect(),
                    });
                }
            }
        }
    }
    Ok(rows)
}

fn csv_error(path: &Path, err: csv::Error) -> ImportError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => ImportError::source_io(path, source),
        _ => ImportError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}
