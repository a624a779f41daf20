//! Tagged field values carried by fetched records and pending change-sets.

use std::{collections::HashMap, fmt, sync::Arc};

use crate::{error::ValueTypeError, literal::GeometryLiteral};

/// A record or change-set: field name to value.
pub type Record = HashMap<String, Value>;

/// Field value as seen by the read and write stages.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    String(Arc<str>),
    /// Raw driver payload, e.g. a native geometry blob.
    Bytes(Arc<[u8]>),
    List(Vec<Value>),
    Map(Vec<(Value, Value)>),
    /// Decoded point geometry.
    Point(Point),
    /// Geometry construction expression awaiting persistence.
    Geometry(GeometryLiteral),
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    pub fn bytes(b: impl AsRef<[u8]>) -> Self {
        Self::Bytes(Arc::from(b.as_ref()))
    }

    /// Build a coordinate list from floats.
    pub fn coordinates(coords: impl IntoIterator<Item = f64>) -> Self {
        Self::List(coords.into_iter().map(Value::F64).collect())
    }

    /// Numeric scalar, or string holding a finite number, as a [`Coordinate`].
    ///
    /// `None` for every other variant and for non-numeric strings.
    pub fn as_coordinate(&self) -> Option<Coordinate> {
        match self {
            Value::I64(v) => Some(Coordinate::Int(*v)),
            Value::U64(v) => Some(Coordinate::UInt(*v)),
            Value::F64(v) => Some(Coordinate::Float(*v)),
            Value::String(s) => Coordinate::parse(s),
            _ => None,
        }
    }

    pub fn try_f64(&self) -> Result<Option<f64>, ValueTypeError> {
        match self {
            Value::F64(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("F64")),
        }
    }

    pub fn try_bytes(&self) -> Result<Option<&[u8]>, ValueTypeError> {
        match self {
            Value::Bytes(v) => Ok(Some(v.as_ref())),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Bytes")),
        }
    }

    pub fn try_point(&self) -> Result<Option<&Point>, ValueTypeError> {
        match self {
            Value::Point(p) => Ok(Some(p)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Point")),
        }
    }

    pub fn try_geometry(&self) -> Result<Option<&GeometryLiteral>, ValueTypeError> {
        match self {
            Value::Geometry(g) => Ok(Some(g)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Geometry")),
        }
    }

    pub fn type_mismatch(&self, expected: impl Into<String>) -> ValueTypeError {
        ValueTypeError::new(expected, self.variant_name())
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::I64(_) => "I64",
            Value::U64(_) => "U64",
            Value::F64(_) => "F64",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
            Value::Point(_) => "Point",
            Value::Geometry(_) => "Geometry",
        }
    }
}

impl From<Point> for Value {
    fn from(value: Point) -> Self {
        Self::Point(value)
    }
}

impl From<GeometryLiteral> for Value {
    fn from(value: GeometryLiteral) -> Self {
        Self::Geometry(value)
    }
}

/// Decoded native point geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Leading four bytes of the native payload (the spatial reference id).
    pub srid: u32,
    /// WKB byte-order flag (`1` = little endian).
    pub byte_order: u8,
    /// WKB geometry type code (`1` = point).
    pub geometry_type: u32,
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            srid: 0,
            byte_order: 1,
            geometry_type: 1,
            x,
            y,
        }
    }

    pub fn coordinates(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "srid={} byte_order={} geometry_type={} x={} y={}",
            self.srid, self.byte_order, self.geometry_type, self.x, self.y
        )
    }
}

/// A single numeric coordinate taken from a pending coordinate list.
///
/// Integers keep their exact value so they render without float rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coordinate {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Coordinate {
    pub fn is_finite(&self) -> bool {
        match self {
            Coordinate::Float(v) => v.is_finite(),
            _ => true,
        }
    }

    /// Parse numeric text such as `"12"` or `"-34.25"`.
    ///
    /// Integers stay integers. `"NaN"`, `"inf"` and non-numeric text are
    /// rejected.
    pub fn parse(text: &str) -> Option<Coordinate> {
        if let Ok(v) = text.parse::<i64>() {
            return Some(Coordinate::Int(v));
        }
        if let Ok(v) = text.parse::<u64>() {
            return Some(Coordinate::UInt(v));
        }
        text.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Coordinate::Float)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Int(v) => write!(f, "{v}"),
            Coordinate::UInt(v) => write!(f, "{v}"),
            Coordinate::Float(v) => write!(f, "{v}"),
        }
    }
}
