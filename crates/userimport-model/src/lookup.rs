//! In-memory lookup tables built from the reference mappings.

use std::collections::{BTreeMap, HashMap};

use crate::options::MatchingMode;

/// Email to user identifier table.
#[derive(Debug, Clone, Default)]
pub struct EmailToIdMapping {
    mode: MatchingMode,
    ids: HashMap<String, String>,
}

impl EmailToIdMapping {
    pub fn new(mode: MatchingMode) -> Self {
        Self {
            mode,
            ids: HashMap::new(),
        }
    }

    /// Insert an entry, returning the identifier it replaced.
    pub fn insert(&mut self, email: &str, id: impl Into<String>) -> Option<String> {
        self.ids.insert(self.mode.key(email).into_owned(), id.into())
    }

    pub fn get(&self, email: &str) -> Option<&str> {
        self.ids.get(self.mode.key(email).as_ref()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Value to identifier table for a single filter.
#[derive(Debug, Clone)]
pub struct FilterValues {
    name: String,
    mode: MatchingMode,
    ids: HashMap<String, String>,
}

impl FilterValues {
    pub fn new(name: impl Into<String>, mode: MatchingMode) -> Self {
        Self {
            name: name.into(),
            mode,
            ids: HashMap::new(),
        }
    }

    /// Filter name as written in the mapping source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert a value, returning the identifier it replaced.
    pub fn insert(&mut self, value: &str, id: impl Into<String>) -> Option<String> {
        self.ids.insert(self.mode.key(value).into_owned(), id.into())
    }

    pub fn get(&self, value: &str) -> Option<&str> {
        self.ids.get(self.mode.key(value).as_ref()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Filter name to [`FilterValues`] table.
#[derive(Debug, Clone, Default)]
pub struct FilterValueMapping {
    mode: MatchingMode,
    filters: BTreeMap<String, FilterValues>,
}

impl FilterValueMapping {
    pub fn new(mode: MatchingMode) -> Self {
        Self {
            mode,
            filters: BTreeMap::new(),
        }
    }

    /// Register a filter, returning the filter it replaced.
    pub fn insert_filter(&mut self, values: FilterValues) -> Option<FilterValues> {
        let key = self.mode.key(&values.name).into_owned();
        self.filters.insert(key, values)
    }

    pub fn filter(&self, name: &str) -> Option<&FilterValues> {
        self.filters.get(self.mode.key(name).as_ref())
    }

    /// Identifier of `value` under filter `name`.
    pub fn get(&self, name: &str, value: &str) -> Option<&str> {
        self.filter(name).and_then(|values| values.get(value))
    }

    /// Filters ordered by lookup key.
    pub fn filters(&self) -> impl Iterator<Item = &FilterValues> {
        self.filters.values()
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}
