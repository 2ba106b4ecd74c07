use serde::{Deserialize, Serialize};

/// A user ready for bulk database importation.
///
/// Serializes as `{"_id": ..., "attributs": [...]}`, the document shape the
/// import job expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportableUser {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "attributs")]
    filter_ids: Vec<String>,
}

impl ImportableUser {
    pub fn new(id: impl Into<String>, filter_ids: Vec<String>) -> Self {
        Self {
            id: id.into(),
            filter_ids,
        }
    }

    /// Resolved user identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Resolved filter value identifiers, in source column order.
    pub fn filter_ids(&self) -> &[String] {
        &self.filter_ids
    }
}
