use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::Args;
use geospatial::{
    FieldOutcome, GeometryTransformer,
    core::{CandidateFields, GeometryKind, Record, Value},
};

use super::VALUE_FIELD;

#[derive(Args)]
pub struct DecodeArgs {
    /// Path to a file holding the raw payload (`-` reads stdin)
    input: PathBuf,

    /// Declared geometry type tag of the payload
    #[arg(short, long, default_value = "point")]
    kind: String,
}

impl DecodeArgs {
    pub fn run(self) -> Result<()> {
        let payload = read_payload(&self.input)?;
        let transformer = GeometryTransformer::new();
        let decoded = decode_one(&transformer, GeometryKind::from(self.kind.as_str()), payload)?;

        match decoded {
            Value::Point(point) => println!("{point}"),
            other => println!("{other:?}"),
        }
        Ok(())
    }
}

fn read_payload(input: &Path) -> Result<Vec<u8>> {
    if input.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read payload from stdin")?;
        return Ok(buf);
    }
    fs::read(input).with_context(|| format!("failed to read {}", input.display()))
}

fn decode_one(
    transformer: &GeometryTransformer,
    kind: GeometryKind,
    payload: Vec<u8>,
) -> Result<Value> {
    let candidates = CandidateFields::new([(VALUE_FIELD.to_string(), kind)].into());
    let mut record = Record::from([(VALUE_FIELD.to_string(), Value::bytes(payload))]);

    let report = transformer.read_transform(&candidates, &mut record)?;
    match report.outcome(VALUE_FIELD) {
        Some(FieldOutcome::Transformed) => {}
        Some(FieldOutcome::Unsupported(kind)) => bail!("no codec for geometry kind '{kind}'"),
        other => bail!("payload was not decoded: {other:?}"),
    }
    record
        .remove(VALUE_FIELD)
        .context("decoded value missing from record")
}
