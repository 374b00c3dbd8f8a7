//! Catalog of the filters offered by the search panel.

use std::{collections::BTreeMap, fmt::Display};


/// Stable identifier of a filter, as used in the selected set and as the
/// checkbox key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FilterId(pub String);

impl FilterId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FilterId {
    fn from(value: &str) -> Self {
        FilterId(value.to_string())
    }
}

impl Display for FilterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Glyph drawn next to a filter label. The frontend maps each variant to an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterGlyph {
    MapPin,
    Calendar,
    Users,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterDescriptor {
    pub id: FilterId,
    pub label: String,
    pub glyph: FilterGlyph,
}

impl FilterDescriptor {
    pub fn new(id: &str, label: &str, glyph: FilterGlyph) -> Self {
        Self {
            id: FilterId::from(id),
            label: label.to_string(),
            glyph,
        }
    }
}

/// Ordered, immutable list of filter descriptors with an id index.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCatalog {
    entries: Vec<FilterDescriptor>,
    index: BTreeMap<FilterId, usize>,
}

impl FilterCatalog {
    /// Builds a catalog keeping the given order. A repeated id keeps its first entry.
    pub fn new(descriptors: impl IntoIterator<Item = FilterDescriptor>) -> Self {
        let mut entries = Vec::new();
        let mut index = BTreeMap::new();
        for descriptor in descriptors {
            if index.contains_key(&descriptor.id) {
                tracing::warn!("duplicate filter id {} dropped from catalog", descriptor.id);
                continue;
            }
            index.insert(descriptor.id.clone(), entries.len());
            entries.push(descriptor);
        }
        Self { entries, index }
    }

    pub fn entries(&self) -> &[FilterDescriptor] {
        &self.entries
    }

    pub fn get(&self, id: &FilterId) -> Option<&FilterDescriptor> {
        self.index.get(id).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, id: &FilterId) -> bool {
        self.index.contains_key(id)
    }

    pub fn label_of(&self, id: &FilterId) -> Option<&str> {
        self.get(id).map(|d| d.label.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for FilterCatalog {
    fn default() -> Self {
        Self::new([
            FilterDescriptor::new("location", "Location", FilterGlyph::MapPin),
            FilterDescriptor::new("date", "Date Created", FilterGlyph::Calendar),
            FilterDescriptor::new("members", "Member Count", FilterGlyph::Users),
        ])
    }
}
