use anyhow::{Result, bail};
use clap::Args;
use geospatial::{
    FieldOutcome, GeometryTransformer,
    core::{CandidateFields, GeometryConstructor, GeometryKind, GeometryLiteral, Record, Value},
};

use super::VALUE_FIELD;

#[derive(Args)]
pub struct EncodeArgs {
    /// Coordinates in order, e.g. `12 34`
    #[arg(required = true, allow_negative_numbers = true, value_parser = parse_coordinate)]
    coordinates: Vec<Value>,

    /// Declared geometry type tag
    #[arg(short, long, default_value = "point")]
    kind: String,

    /// Function wrapping the well-known text
    #[arg(short, long, default_value = "ST_GeomFromText")]
    constructor: String,
}

impl EncodeArgs {
    pub fn run(self) -> Result<()> {
        let transformer = GeometryTransformer::builder()
            .with_default_codecs()
            .with_constructor(GeometryConstructor::from(self.constructor.as_str()))
            .build();
        let literal = encode_one(
            &transformer,
            GeometryKind::from(self.kind.as_str()),
            self.coordinates,
        )?;
        println!("{literal}");
        Ok(())
    }
}

/// Integers stay integers so they print without a fractional part.
fn parse_coordinate(raw: &str) -> Result<Value, String> {
    if let Ok(v) = raw.parse::<i64>() {
        return Ok(Value::I64(v));
    }
    raw.parse::<f64>()
        .map(Value::F64)
        .map_err(|e| format!("invalid coordinate '{raw}': {e}"))
}

fn encode_one(
    transformer: &GeometryTransformer,
    kind: GeometryKind,
    coordinates: Vec<Value>,
) -> Result<GeometryLiteral> {
    let candidates = CandidateFields::new([(VALUE_FIELD.to_string(), kind)].into());
    let mut change_set = Record::from([(VALUE_FIELD.to_string(), Value::List(coordinates))]);

    let report = transformer.write_transform(&candidates, &mut change_set)?;
    if let Some(FieldOutcome::Unsupported(kind)) = report.outcome(VALUE_FIELD) {
        bail!("no codec for geometry kind '{kind}'");
    }
    match change_set.remove(VALUE_FIELD) {
        Some(Value::Geometry(literal)) => Ok(literal),
        other => bail!("coordinates were not encoded: {other:?}"),
    }
}
