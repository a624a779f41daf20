use geospatial_core::GeometryKind;

/// What a stage did with one candidate field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldOutcome {
    /// The field is missing from the record or null.
    Absent,
    /// The value does not have the shape this stage converts from.
    NotApplicable,
    /// No codec is registered for the declared geometry kind.
    Unsupported(GeometryKind),
    /// The value was replaced in place.
    Transformed,
}

/// Per-field outcomes of one stage run, in field name order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransformReport {
    fields: Vec<(String, FieldOutcome)>,
}

impl TransformReport {
    pub(crate) fn push(&mut self, field: &str, outcome: FieldOutcome) {
        self.fields.push((field.to_string(), outcome));
    }

    pub fn outcome(&self, field: &str) -> Option<&FieldOutcome> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, outcome)| outcome)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldOutcome)> {
        self.fields.iter().map(|(name, outcome)| (name.as_str(), outcome))
    }

    /// Fields that were replaced in place.
    pub fn transformed(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, outcome)| matches!(outcome, FieldOutcome::Transformed))
            .map(|(name, _)| name)
            .collect()
    }

    /// Fields left untouched because their geometry kind has no codec.
    pub fn unsupported(&self) -> Vec<(&str, &GeometryKind)> {
        self.iter()
            .filter_map(|(name, outcome)| match outcome {
                FieldOutcome::Unsupported(kind) => Some((name, kind)),
                _ => None,
            })
            .collect()
    }

    /// `true` when no field was modified.
    pub fn is_unchanged(&self) -> bool {
        self.transformed().is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
