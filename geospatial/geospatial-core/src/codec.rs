//! Codec trait implemented once per supported geometry kind.

use crate::{
    error::CodecError,
    kind::GeometryKind,
    value::{Coordinate, Value},
};

/// Translates one geometry kind between its native binary form and
/// well-known text.
///
/// Implementations are registered with `geospatial::GeometryTransformer`
/// and dispatched on [`GeometryCodec::kind`].
pub trait GeometryCodec: Send + Sync {
    /// The geometry kind this codec handles.
    fn kind(&self) -> GeometryKind;

    /// Decode a raw native payload fetched from the database.
    ///
    /// Returns `Err` if the payload does not fit the kind's layout.
    fn decode(&self, payload: &[u8]) -> Result<Value, CodecError>;

    /// Build the well-known text for a pending coordinate sequence.
    fn encode(&self, coordinates: &[Coordinate]) -> Result<String, CodecError>;
}
