use std::fmt;

/// Geometry kinds named by a schema's geospatial type tags.
///
/// Conversion from a tag is exact and case-sensitive: `"POINT"` is
/// [`GeometryKind::Unknown`], not [`GeometryKind::Point`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeometryKind {
    /// Any geometry (`geometry`)
    Geometry,
    /// Single point (`point`)
    Point,
    /// Line string (`linestring`)
    LineString,
    /// Polygon (`polygon`)
    Polygon,
    /// Unknown/custom geospatial tag
    Unknown(String),
}

impl GeometryKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Geometry => "geometry",
            Self::Point => "point",
            Self::LineString => "linestring",
            Self::Polygon => "polygon",
            Self::Unknown(s) => s,
        }
    }

    /// Upper-cased tag used as the well-known-text geometry keyword.
    pub fn wkt_tag(&self) -> String {
        self.as_str().to_uppercase()
    }
}

impl From<&str> for GeometryKind {
    fn from(s: &str) -> Self {
        match s {
            "geometry" => Self::Geometry,
            "point" => Self::Point,
            "linestring" => Self::LineString,
            "polygon" => Self::Polygon,
            other => Self::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
