//! Delimited user table reading.

mod header;
mod lines;
mod reader;

pub use header::CsvHeaders;
pub use reader::{CsvOptions, DEFAULT_DELIMITER, RawRow, UserTable, read_user_table};
