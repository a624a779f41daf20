//! Structured geometry literal produced on the write path.

use std::fmt;

/// Database function that turns well-known text into a native geometry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GeometryConstructor {
    /// `ST_GeomFromText`
    #[default]
    GeomFromText,
    /// Any other function name, rendered verbatim.
    Custom(String),
}

impl GeometryConstructor {
    pub fn function_name(&self) -> &str {
        match self {
            Self::GeomFromText => "ST_GeomFromText",
            Self::Custom(name) => name,
        }
    }
}

impl From<&str> for GeometryConstructor {
    fn from(s: &str) -> Self {
        match s {
            "ST_GeomFromText" => Self::GeomFromText,
            other => Self::Custom(other.to_string()),
        }
    }
}

/// A geometry-from-text call to be evaluated by the database.
///
/// Query builders should render this as an expression, not bind
/// [`well_known_text`](Self::well_known_text) as a plain string parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometryLiteral {
    pub constructor: GeometryConstructor,
    pub well_known_text: String,
}

impl GeometryLiteral {
    pub fn new(well_known_text: impl Into<String>) -> Self {
        Self {
            constructor: GeometryConstructor::default(),
            well_known_text: well_known_text.into(),
        }
    }

    pub fn with_constructor(mut self, constructor: GeometryConstructor) -> Self {
        self.constructor = constructor;
        self
    }

    /// Render as a SQL expression, e.g. `ST_GeomFromText('POINT(12 34)')`.
    pub fn to_sql(&self) -> String {
        format!(
            "{}('{}')",
            self.constructor.function_name(),
            self.well_known_text.replace('\'', "''")
        )
    }
}

impl fmt::Display for GeometryLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}
