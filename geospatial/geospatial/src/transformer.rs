//! Read and write stages that translate geospatial fields on records.

use std::{collections::HashMap, sync::Arc};

use geospatial_core::{
    CandidateFields, GeometryCodec, GeometryConstructor, GeometryKind, GeometryLiteral,
    GeospatialTypes, Record, SchemaDescriptor, Value, classify,
};
#[cfg(feature = "point")]
use geospatial_point::PointCodec;

use crate::{
    error::TransformError,
    report::{FieldOutcome, TransformReport},
};

/// Which side of the persistence boundary a record is crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// After fetch: raw payloads become decoded geometry.
    Read,
    /// Before persist: coordinate lists become geometry literals.
    Write,
}

/// Decodes fetched geospatial fields and encodes pending ones using
/// registered [`GeometryCodec`]s.
pub struct GeometryTransformer {
    types: GeospatialTypes,
    codecs: HashMap<GeometryKind, Arc<dyn GeometryCodec>>,
    constructor: GeometryConstructor,
}

/// Builder for configuring [`GeometryTransformer`].
pub struct GeometryTransformerBuilder {
    types: GeospatialTypes,
    codecs: Vec<Arc<dyn GeometryCodec>>,
    constructor: GeometryConstructor,
}

impl GeometryTransformer {
    /// Create a builder for [`GeometryTransformer`].
    pub fn builder() -> GeometryTransformerBuilder {
        GeometryTransformerBuilder {
            types: GeospatialTypes::default(),
            codecs: Vec::new(),
            constructor: GeometryConstructor::default(),
        }
    }

    /// Transformer with the default type set and all built-in codecs.
    pub fn new() -> Self {
        Self::builder().with_default_codecs().build()
    }

    /// Register a codec for its geometry kind, replacing any previous one.
    pub fn register_codec(&mut self, codec: Box<dyn GeometryCodec>) {
        self.register_shared_codec(Arc::from(codec));
    }

    /// Register a shared codec for its geometry kind.
    pub fn register_shared_codec(&mut self, codec: Arc<dyn GeometryCodec>) {
        self.codecs.insert(codec.kind(), codec);
    }

    pub fn find_codec(&self, kind: &GeometryKind) -> Option<&Arc<dyn GeometryCodec>> {
        self.codecs.get(kind)
    }

    /// Classify `schema` against this transformer's type set.
    pub fn candidates(&self, schema: &SchemaDescriptor) -> CandidateFields {
        classify(schema, &self.types)
    }

    /// Run `stage` over one record.
    pub fn apply(
        &self,
        stage: Stage,
        candidates: &CandidateFields,
        record: &mut Record,
    ) -> Result<TransformReport, TransformError> {
        match stage {
            Stage::Read => self.read_transform(candidates, record),
            Stage::Write => self.write_transform(candidates, record),
        }
    }

    /// Post-fetch stage: replace raw payloads in candidate fields with
    /// decoded geometry.
    ///
    /// Fields are visited in name order. On error, fields visited earlier
    /// stay decoded and the failing field is left as it was.
    pub fn read_transform(
        &self,
        candidates: &CandidateFields,
        record: &mut Record,
    ) -> Result<TransformReport, TransformError> {
        let mut report = TransformReport::default();
        for (field, kind) in candidates.sorted() {
            let outcome = self.read_field(field, kind, record)?;
            report.push(field, outcome);
        }
        Ok(report)
    }

    /// Apply [`read_transform`](Self::read_transform) to every fetched
    /// record, stopping at the first failure.
    pub fn read_all(
        &self,
        candidates: &CandidateFields,
        records: &mut [Record],
    ) -> Result<Vec<TransformReport>, TransformError> {
        records
            .iter_mut()
            .map(|record| self.read_transform(candidates, record))
            .collect()
    }

    /// Pre-persist stage: replace pending coordinate lists in candidate
    /// fields with geometry literals.
    ///
    /// Error behavior matches [`read_transform`](Self::read_transform).
    pub fn write_transform(
        &self,
        candidates: &CandidateFields,
        change_set: &mut Record,
    ) -> Result<TransformReport, TransformError> {
        let mut report = TransformReport::default();
        for (field, kind) in candidates.sorted() {
            let outcome = self.write_field(field, kind, change_set)?;
            report.push(field, outcome);
        }
        Ok(report)
    }

    fn read_field(
        &self,
        field: &str,
        kind: &GeometryKind,
        record: &mut Record,
    ) -> Result<FieldOutcome, TransformError> {
        let Some(slot) = record.get_mut(field) else {
            return Ok(FieldOutcome::Absent);
        };
        let payload = match &*slot {
            Value::Null => return Ok(FieldOutcome::Absent),
            Value::Bytes(payload) => payload,
            _ => return Ok(FieldOutcome::NotApplicable),
        };
        let Some(codec) = self.find_codec(kind) else {
            return Ok(unsupported(Stage::Read, field, kind));
        };

        let decoded = codec
            .decode(payload)
            .map_err(|source| TransformError::Decode {
                field: field.to_string(),
                source,
            })?;
        tracing::trace!(field, %kind, "decoded geospatial field");
        *slot = decoded;
        Ok(FieldOutcome::Transformed)
    }

    fn write_field(
        &self,
        field: &str,
        kind: &GeometryKind,
        change_set: &mut Record,
    ) -> Result<FieldOutcome, TransformError> {
        let Some(slot) = change_set.get_mut(field) else {
            return Ok(FieldOutcome::Absent);
        };
        let coordinates = match &*slot {
            Value::Null => return Ok(FieldOutcome::Absent),
            Value::List(items) => match items
                .iter()
                .map(Value::as_coordinate)
                .collect::<Option<Vec<_>>>()
            {
                Some(coordinates) => coordinates,
                None => return Ok(FieldOutcome::NotApplicable),
            },
            _ => return Ok(FieldOutcome::NotApplicable),
        };
        let Some(codec) = self.find_codec(kind) else {
            return Ok(unsupported(Stage::Write, field, kind));
        };

        let wkt = codec
            .encode(&coordinates)
            .map_err(|source| TransformError::Encode {
                field: field.to_string(),
                source,
            })?;
        tracing::trace!(field, %kind, %wkt, "encoded geospatial field");
        *slot = Value::Geometry(
            GeometryLiteral::new(wkt).with_constructor(self.constructor.clone()),
        );
        Ok(FieldOutcome::Transformed)
    }
}

impl Default for GeometryTransformer {
    fn default() -> Self {
        Self::new()
    }
}

fn unsupported(stage: Stage, field: &str, kind: &GeometryKind) -> FieldOutcome {
    tracing::warn!(
        field,
        %kind,
        ?stage,
        "no codec registered for geometry kind, leaving field unchanged"
    );
    FieldOutcome::Unsupported(kind.clone())
}

impl GeometryTransformerBuilder {
    /// Replace the set of type tags treated as geospatial.
    pub fn with_types(mut self, types: GeospatialTypes) -> Self {
        self.types = types;
        self
    }

    /// Add one type tag to the geospatial set.
    pub fn with_type(mut self, type_tag: impl Into<String>) -> Self {
        self.types.insert(type_tag);
        self
    }

    /// Register a geometry codec.
    pub fn with_codec(mut self, codec: Box<dyn GeometryCodec>) -> Self {
        self.codecs.push(Arc::from(codec));
        self
    }

    /// Register all built-in codecs (Point).
    pub fn with_default_codecs(self) -> Self {
        let s = self;
        #[cfg(feature = "point")]
        let s = s.with_codec(Box::new(PointCodec::new()));
        s
    }

    /// Set the function wrapping encoded well-known text
    /// (default: `ST_GeomFromText`).
    pub fn with_constructor(mut self, constructor: GeometryConstructor) -> Self {
        self.constructor = constructor;
        self
    }

    /// Build the transformer.
    pub fn build(self) -> GeometryTransformer {
        let mut transformer = GeometryTransformer {
            types: self.types,
            codecs: HashMap::new(),
            constructor: self.constructor,
        };
        for codec in self.codecs {
            transformer.register_shared_codec(codec);
        }
        transformer
    }
}
