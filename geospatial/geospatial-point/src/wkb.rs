//! Native point payload decoding.
//!
//! Layout, all little endian:
//!
//! | Offset | Size | Field            |
//! |--------|------|------------------|
//! | 0      | 4    | SRID             |
//! | 4      | 1    | byte-order flag  |
//! | 5      | 4    | geometry type    |
//! | 9      | 8    | X                |
//! | 17     | 8    | Y                |
//!
//! Bytes past offset 25 are ignored.

use bytes::Buf;
use geospatial_core::{CodecError, GeometryKind, Point};

/// Length of a native point payload: 4-byte SRID, 1-byte order flag,
/// 4-byte type code and two 8-byte coordinates.
pub const POINT_PAYLOAD_LEN: usize = 25;

pub fn decode_point(payload: &[u8]) -> Result<Point, CodecError> {
    let mut buf = payload;
    let eof_err = || CodecError::Truncated {
        kind: GeometryKind::Point,
        expected: POINT_PAYLOAD_LEN,
        actual: payload.len(),
    };

    Ok(Point {
        srid: buf.try_get_u32_le().map_err(|_| eof_err())?,
        byte_order: buf.try_get_u8().map_err(|_| eof_err())?,
        geometry_type: buf.try_get_u32_le().map_err(|_| eof_err())?,
        x: buf.try_get_f64_le().map_err(|_| eof_err())?,
        y: buf.try_get_f64_le().map_err(|_| eof_err())?,
    })
}
