//! Well-known-text rendering for points.

use geospatial_core::{CodecError, Coordinate, GeometryKind};

/// Render `coordinates` as `POINT(x y)`.
///
/// Coordinates are joined by single spaces in their `Display` form, which is
/// locale-independent and never uses exponent notation.
pub fn point_wkt(coordinates: &[Coordinate]) -> Result<String, CodecError> {
    if coordinates.len() != 2 {
        return Err(CodecError::Arity {
            kind: GeometryKind::Point,
            expected: 2,
            actual: coordinates.len(),
        });
    }
    if let Some(index) = coordinates.iter().position(|c| !c.is_finite()) {
        return Err(CodecError::NonFinite {
            kind: GeometryKind::Point,
            index,
        });
    }
    let joined = coordinates
        .iter()
        .map(Coordinate::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    Ok(format!("{}({joined})", GeometryKind::Point.wkt_tag()))
}
