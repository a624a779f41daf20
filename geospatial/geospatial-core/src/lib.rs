//! Persistence-agnostic core types and codec contracts for `geospatial`.
//!
//! This crate provides the record representation ([`Value`] / [`Record`]),
//! the schema side ([`SchemaDescriptor`] / [`GeospatialTypes`]), the column
//! classifier ([`classify`]) and the [`GeometryCodec`] trait implemented by
//! per-kind codecs.

mod classify;
mod codec;
mod error;
mod kind;
mod literal;
mod schema;
mod value;

pub use classify::{CandidateFields, classify, classify_default};
pub use codec::GeometryCodec;
pub use error::{CodecError, ValueTypeError};
pub use kind::GeometryKind;
pub use literal::{GeometryConstructor, GeometryLiteral};
pub use schema::{GeospatialTypes, SchemaDescriptor};
pub use value::{Coordinate, Point, Record, Value};
