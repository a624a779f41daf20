//! Schema-side inputs to classification.

use std::collections::{HashMap, HashSet};

/// Field name to declared column type tag for one record type.
///
/// Supplied by the embedding application; the core only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SchemaDescriptor(HashMap<String, String>);

impl SchemaDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, type_tag: impl Into<String>) -> Self {
        self.0.insert(name.into(), type_tag.into());
        self
    }

    pub fn type_of(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains_field(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SchemaDescriptor {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Type tags treated as geospatial. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeospatialTypes(HashSet<String>);

impl GeospatialTypes {
    /// Tags of the database's geospatial column types.
    pub const DEFAULT_TAGS: [&'static str; 4] = ["geometry", "point", "linestring", "polygon"];

    pub fn empty() -> Self {
        Self(HashSet::new())
    }

    pub fn with_type(mut self, type_tag: impl Into<String>) -> Self {
        self.insert(type_tag);
        self
    }

    pub fn insert(&mut self, type_tag: impl Into<String>) -> bool {
        self.0.insert(type_tag.into())
    }

    pub fn contains(&self, type_tag: &str) -> bool {
        self.0.contains(type_tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for GeospatialTypes {
    fn default() -> Self {
        Self::DEFAULT_TAGS.into_iter().collect()
    }
}

impl<T: Into<String>> FromIterator<T> for GeospatialTypes {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
