use geospatial_core::{CodecError, Coordinate, GeometryCodec, GeometryKind, Value};

use crate::{decode_point, point_wkt};

/// [`GeometryCodec`] for the `point` type tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointCodec;

impl PointCodec {
    pub fn new() -> Self {
        Self
    }
}

impl GeometryCodec for PointCodec {
    fn kind(&self) -> GeometryKind {
        GeometryKind::Point
    }

    fn decode(&self, payload: &[u8]) -> Result<Value, CodecError> {
        decode_point(payload).map(Value::Point)
    }

    fn encode(&self, coordinates: &[Coordinate]) -> Result<String, CodecError> {
        point_wkt(coordinates)
    }
}
