mod error;
mod report;
mod transformer;

pub use error::TransformError;
pub use geospatial_core as core;
#[cfg(feature = "point")]
pub use geospatial_point as point;
pub use report::{FieldOutcome, TransformReport};
pub use transformer::{GeometryTransformer, GeometryTransformerBuilder, Stage};
