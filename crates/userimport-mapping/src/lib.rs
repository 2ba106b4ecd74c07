#![deny(unsafe_code)]

//! Loading of the reference mappings that translate emails and filter values
//! into database identifiers.

pub mod loaders;
pub mod paths;

pub use loaders::{ReferenceMappings, load_email_mapping, load_filter_mapping};
pub use paths::{
    DEFAULT_LOCALE, DEFAULT_MAPPING_DIR, EMAIL_MAPPING_FILE, FILTER_MAPPING_FILE,
    MAPPING_DIR_ENV_VAR, MappingSources, resolve_mapping_dir,
};
