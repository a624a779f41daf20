//! Column classifier: picks the geospatial fields out of a schema.

use std::{collections::HashMap, ops::Deref};

use crate::{
    kind::GeometryKind,
    schema::{GeospatialTypes, SchemaDescriptor},
};

/// Geospatial fields of one schema, keyed by field name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateFields(HashMap<String, GeometryKind>);

impl CandidateFields {
    pub fn new(fields: HashMap<String, GeometryKind>) -> Self {
        Self(fields)
    }

    /// Field names in ascending order.
    pub fn sorted(&self) -> Vec<(&str, &GeometryKind)> {
        let mut fields: Vec<_> = self.0.iter().map(|(k, v)| (k.as_str(), v)).collect();
        fields.sort_unstable_by(|a, b| a.0.cmp(b.0));
        fields
    }
}

impl Deref for CandidateFields {
    type Target = HashMap<String, GeometryKind>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Return the fields of `schema` whose declared type tag is in `types`.
pub fn classify(schema: &SchemaDescriptor, types: &GeospatialTypes) -> CandidateFields {
    let fields: HashMap<_, _> = schema
        .iter()
        .filter(|(_, tag)| types.contains(tag))
        .map(|(name, tag)| (name.to_string(), GeometryKind::from(tag)))
        .collect();
    tracing::trace!(
        fields = schema.len(),
        candidates = fields.len(),
        "classified geospatial columns"
    );
    CandidateFields(fields)
}

/// [`classify`] against [`GeospatialTypes::default`].
pub fn classify_default(schema: &SchemaDescriptor) -> CandidateFields {
    classify(schema, &GeospatialTypes::default())
}
