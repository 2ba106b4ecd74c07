//! Mapping file locations.

use std::path::{Path, PathBuf};

/// Environment variable for overriding the mapping directory.
pub const MAPPING_DIR_ENV_VAR: &str = "USERIMPORT_MAPPING_DIR";

/// Mapping directory used when neither a flag nor the environment names one.
pub const DEFAULT_MAPPING_DIR: &str = "storage/app/mapping";

pub const EMAIL_MAPPING_FILE: &str = "emails.json";
pub const FILTER_MAPPING_FILE: &str = "filters.json";

/// Language key holding filter names and value labels.
pub const DEFAULT_LOCALE: &str = "fr";

/// Where the reference mappings are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingSources {
    /// JSON array of `{"email", "_id"}` records.
    pub email_path: PathBuf,
    /// JSON array of `{"name": {locale: ..}, "values": [{"_id", locale: ..}]}` records.
    pub filter_path: PathBuf,
    /// Language key used for filter names and value labels.
    pub locale: String,
}

impl MappingSources {
    pub fn new(email_path: impl Into<PathBuf>, filter_path: impl Into<PathBuf>) -> Self {
        Self {
            email_path: email_path.into(),
            filter_path: filter_path.into(),
            locale: DEFAULT_LOCALE.to_string(),
        }
    }

    /// Standard file names inside a mapping directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(EMAIL_MAPPING_FILE), dir.join(FILTER_MAPPING_FILE))
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

/// Get the mapping directory.
///
/// Resolution order:
/// 1. `explicit` (command-line flag)
/// 2. `USERIMPORT_MAPPING_DIR` environment variable
/// 3. `storage/app/mapping` relative to the working directory
pub fn resolve_mapping_dir(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    if let Ok(dir) = std::env::var(MAPPING_DIR_ENV_VAR) {
        return PathBuf::from(dir);
    }
    PathBuf::from(DEFAULT_MAPPING_DIR)
}
