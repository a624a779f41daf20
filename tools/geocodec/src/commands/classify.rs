use anyhow::Result;
use clap::Args;
use geospatial::{GeometryTransformer, core::SchemaDescriptor};

#[derive(Args)]
pub struct ClassifyArgs {
    /// Schema fields as `name=type`
    #[arg(required = true, value_parser = parse_field)]
    fields: Vec<(String, String)>,

    /// Extra type tag to treat as geospatial (repeatable)
    #[arg(short = 't', long = "type")]
    types: Vec<String>,
}

impl ClassifyArgs {
    pub fn run(self) -> Result<()> {
        for line in classify_lines(self.fields, self.types) {
            println!("{line}");
        }
        Ok(())
    }
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, tag)) if !name.is_empty() && !tag.is_empty() => {
            Ok((name.to_string(), tag.to_string()))
        }
        _ => Err(format!("expected name=type, got '{raw}'")),
    }
}

fn classify_lines(fields: Vec<(String, String)>, types: Vec<String>) -> Vec<String> {
    let transformer = types
        .into_iter()
        .fold(GeometryTransformer::builder(), |b, tag| b.with_type(tag))
        .with_default_codecs()
        .build();
    let schema: SchemaDescriptor = fields.into_iter().collect();
    transformer
        .candidates(&schema)
        .sorted()
        .into_iter()
        .map(|(name, kind)| format!("{name}: {kind}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_type_pairs() {
        assert_eq!(
            parse_field("location=point").unwrap(),
            ("location".to_string(), "point".to_string())
        );
        assert!(parse_field("location").is_err());
        assert!(parse_field("=point").is_err());
    }

    #[test]
    fn lists_geospatial_fields_sorted() {
        let fields = vec![
            ("id".to_string(), "integer".to_string()),
            ("route".to_string(), "linestring".to_string()),
            ("location".to_string(), "point".to_string()),
        ];
        assert_eq!(
            classify_lines(fields, Vec::new()),
            vec!["location: point", "route: linestring"]
        );
    }

    #[test]
    fn extra_types_extend_the_default_set() {
        let fields = vec![("area".to_string(), "multipolygon".to_string())];
        assert!(classify_lines(fields.clone(), Vec::new()).is_empty());
        assert_eq!(
            classify_lines(fields, vec!["multipolygon".to_string()]),
            vec!["area: multipolygon"]
        );
    }
}
