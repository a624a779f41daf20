//! Error types for the read and write stages.

use geospatial_core::CodecError;

/// Errors produced by [`GeometryTransformer`](crate::GeometryTransformer).
///
/// Only data that is clearly geospatial but malformed ends up here; values
/// that are not ours to touch are passed through and reported in the
/// [`TransformReport`](crate::TransformReport) instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransformError {
    /// A raw payload in a geospatial field could not be decoded.
    #[error("failed to decode geospatial field '{field}': {source}")]
    Decode {
        field: String,
        #[source]
        source: CodecError,
    },

    /// A pending coordinate list could not be encoded.
    #[error("failed to encode geospatial field '{field}': {source}")]
    Encode {
        field: String,
        #[source]
        source: CodecError,
    },
}

impl TransformError {
    pub fn field(&self) -> &str {
        match self {
            Self::Decode { field, .. } | Self::Encode { field, .. } => field,
        }
    }
}
