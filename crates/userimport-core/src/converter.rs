//! Conversion entry points.

use std::path::Path;
use std::time::Instant;

use tracing::{info, info_span};

use userimport_ingest::{CsvOptions, read_user_table};
use userimport_mapping::{MappingSources, ReferenceMappings};
use userimport_model::{ImportableUser, MatchingMode, Result, UserRecord};

use crate::assemble::assemble_users;
use crate::resolve::resolve_user;

/// Converts a user file into importable users.
///
/// Implementations differ by source format; resolution and assembly are shared
/// through [`convert_records`].
pub trait UserImportConverter {
    /// Users of `source` in file order.
    ///
    /// Fails on the first structural or lookup error without partial output.
    fn convert_to_importable_format(&self, source: &Path) -> Result<Vec<ImportableUser>>;
}

/// Options controlling a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Source file dialect.
    pub csv: CsvOptions,
    /// Comparison of source values against mapping keys.
    pub matching: MatchingMode,
}

impl ConvertOptions {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.csv = self.csv.with_delimiter(delimiter);
        self
    }

    #[must_use]
    pub fn with_matching(mut self, matching: MatchingMode) -> Self {
        self.matching = matching;
        self
    }
}

/// Converter for delimited text user files.
#[derive(Debug, Clone)]
pub struct CsvUserImportConverter {
    sources: MappingSources,
    options: ConvertOptions,
}

impl CsvUserImportConverter {
    pub fn new(sources: MappingSources) -> Self {
        Self {
            sources,
            options: ConvertOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }
}

impl UserImportConverter for CsvUserImportConverter {
    fn convert_to_importable_format(&self, source: &Path) -> Result<Vec<ImportableUser>> {
        let span = info_span!("convert", source = %source.display());
        let _guard = span.enter();
        let start = Instant::now();

        let mappings = ReferenceMappings::load(&self.sources, self.options.matching)?;
        let table = read_user_table(source, &self.options.csv)?;
        let users = convert_records(table.records(), &mappings)?;

        info!(
            users = users.len(),
            duration_ms = start.elapsed().as_millis(),
            "conversion complete"
        );
        Ok(users)
    }
}

/// Resolve and assemble already-parsed records, independent of source format.
pub fn convert_records<I>(records: I, mappings: &ReferenceMappings) -> Result<Vec<ImportableUser>>
where
    I: IntoIterator<Item = UserRecord>,
{
    assemble_users(
        records
            .into_iter()
            .map(|record| resolve_user(&record, &mappings.emails, &mappings.filters)),
    )
}
