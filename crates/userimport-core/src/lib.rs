//! User file to importable format conversion.
//!
//! A conversion runs four steps in order:
//!
//! 1. **Load mappings** - email and filter value identifier tables
//! 2. **Read source** - header and row shape validation
//! 3. **Resolve** - each row to an [`ImportableUser`](userimport_model::ImportableUser)
//! 4. **Assemble** - resolved users in source order
//!
//! The first failure aborts the conversion; no partial output is returned.
//!
//! # Example
//!
//! ```ignore
//! use userimport_core::{CsvUserImportConverter, UserImportConverter};
//! use userimport_mapping::MappingSources;
//!
//! let converter = CsvUserImportConverter::new(MappingSources::from_dir("storage/app/mapping"));
//! let users = converter.convert_to_importable_format(Path::new("users.csv"))?;
//! println!("{}", userimport_core::render_json(&users)?);
//! ```

pub mod assemble;
pub mod converter;
pub mod output;
pub mod resolve;

pub use assemble::assemble_users;
pub use converter::{ConvertOptions, CsvUserImportConverter, UserImportConverter, convert_records};
pub use output::render_json;
pub use resolve::resolve_user;
