//! POINT codec for `geospatial`.
//!
//! Key components:
//! - [`decode_point`] — native point payload → [`geospatial_core::Point`]
//! - [`point_wkt`] — coordinate pair → `POINT(x y)` well-known text
//! - [`PointCodec`] — both of the above behind [`geospatial_core::GeometryCodec`]

mod codec;
mod wkb;
mod wkt;

pub use codec::PointCodec;
pub use wkb::{POINT_PAYLOAD_LEN, decode_point};
pub use wkt::point_wkt;
