//! JSON mapping loaders.
//!
//! Both mappings are read fresh on every call; nothing is cached between
//! conversions.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use userimport_model::{
    EmailToIdMapping, FilterValueMapping, FilterValues, ImportError, MatchingMode, Result,
};

use crate::paths::MappingSources;

#[derive(Debug, Deserialize)]
struct EmailRecord {
    email: String,
    #[serde(rename = "_id")]
    id: String,
}

#[derive(Debug, Deserialize)]
struct FilterRecord {
    name: BTreeMap<String, Value>,
    #[serde(default)]
    values: Vec<FilterValueRecord>,
}

#[derive(Debug, Deserialize)]
struct FilterValueRecord {
    #[serde(rename = "_id")]
    id: String,
    #[serde(flatten)]
    labels: BTreeMap<String, Value>,
}

/// Both lookup tables needed to resolve a user file.
#[derive(Debug, Clone)]
pub struct ReferenceMappings {
    pub emails: EmailToIdMapping,
    pub filters: FilterValueMapping,
}

impl ReferenceMappings {
    pub fn load(sources: &MappingSources, mode: MatchingMode) -> Result<Self> {
        Ok(Self {
            emails: load_email_mapping(sources, mode)?,
            filters: load_filter_mapping(sources, mode)?,
        })
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|source| ImportError::MappingRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|e| ImportError::MappingFormat {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Build the email table from `sources.email_path`.
///
/// When an email appears twice the later record wins.
pub fn load_email_mapping(
    sources: &MappingSources,
    mode: MatchingMode,
) -> Result<EmailToIdMapping> {
    let path = sources.email_path.as_path();
    let records: Vec<EmailRecord> = read_json(path)?;
    let mut mapping = EmailToIdMapping::new(mode);
    for (index, record) in records.into_iter().enumerate() {
        if let Some(replaced) = mapping.insert(&record.email, record.id) {
            warn!(
                path = %path.display(),
                index,
                replaced_id = %replaced,
                "duplicate email in mapping, later entry wins"
            );
        }
    }
    info!(path = %path.display(), emails = mapping.len(), "loaded email mapping");
    Ok(mapping)
}

/// Build the filter table from `sources.filter_path`.
///
/// Filters are keyed on their name in `sources.locale` and values on their
/// label in the same locale. A filter without a name in that locale is an
/// error; a value without a label is skipped.
pub fn load_filter_mapping(
    sources: &MappingSources,
    mode: MatchingMode,
) -> Result<FilterValueMapping> {
    let path = sources.filter_path.as_path();
    let locale = sources.locale.as_str();
    let records: Vec<FilterRecord> = read_json(path)?;
    let mut mapping = FilterValueMapping::new(mode);
    for (index, record) in records.iter().enumerate() {
        let Some(name) = record.name.get(locale).and_then(Value::as_str) else {
            return Err(ImportError::MappingFormat {
                path: path.to_path_buf(),
                reason: format!("filter #{index} has no \"{locale}\" name"),
            });
        };
        let mut values = FilterValues::new(name, mode);
        for entry in &record.values {
            let Some(label) = entry.labels.get(locale).and_then(Value::as_str) else {
                debug!(filter = name, id = %entry.id, locale, "skipping value without label");
                continue;
            };
            if values.insert(label, entry.id.as_str()).is_some() {
                warn!(filter = name, value = label, "duplicate filter value, later entry wins");
            }
        }
        if mapping.insert_filter(values).is_some() {
            warn!(filter = name, "duplicate filter in mapping, later entry wins");
        }
    }
    info!(path = %path.display(), filters = mapping.len(), "loaded filter mapping");
    Ok(mapping)
}
