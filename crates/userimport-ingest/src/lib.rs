//! User source file ingestion.
//!
//! Reads a delimited user file into a [`UserTable`]: a validated header row
//! and the raw rows beneath it. Each row can then be viewed as a
//! [`UserRecord`](userimport_model::UserRecord) for resolution.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use userimport_ingest::{CsvOptions, read_user_table};
//!
//! let table = read_user_table(Path::new("users.csv"), &CsvOptions::default())?;
//! for record in table.records() {
//!     println!("{:?}", record.email());
//! }
//! ```

mod table;

// === Source Reading ===
pub use table::{CsvHeaders, CsvOptions, DEFAULT_DELIMITER, RawRow, UserTable, read_user_table};
