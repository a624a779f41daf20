use geospatial_core::{
    Coordinate, GeometryConstructor, GeometryKind, GeometryLiteral, GeospatialTypes, Point,
    SchemaDescriptor, Value,
};

#[test]
fn value_bytes_creates_arc_slice_value() {
    let value = Value::bytes([1u8, 2, 3]);
    assert_eq!(value.try_bytes().unwrap(), Some(&[1u8, 2, 3][..]));
}

#[test]
fn typed_accessor_reports_mismatch() {
    let err = Value::string("x").try_bytes().unwrap_err();
    assert_eq!(err.expected, "Bytes");
    assert_eq!(err.actual, "String");
    assert_eq!(err.to_string(), "type mismatch: expected Bytes, got String");
}

#[test]
fn typed_accessor_maps_null_to_none() {
    assert_eq!(Value::Null.try_point().unwrap(), None);
    assert_eq!(Value::Null.try_f64().unwrap(), None);
}

#[test]
fn numeric_scalars_are_coordinates() {
    assert_eq!(Value::I64(-3).as_coordinate(), Some(Coordinate::Int(-3)));
    assert_eq!(Value::U64(7).as_coordinate(), Some(Coordinate::UInt(7)));
    assert_eq!(Value::F64(1.5).as_coordinate(), Some(Coordinate::Float(1.5)));
    assert_eq!(Value::Bool(true).as_coordinate(), None);
    assert_eq!(Value::Null.as_coordinate(), None);
    assert_eq!(Value::bytes([1u8]).as_coordinate(), None);
}

#[test]
fn numeric_strings_are_coordinates() {
    assert_eq!(Value::string("12").as_coordinate(), Some(Coordinate::Int(12)));
    assert_eq!(
        Value::string("-34.25").as_coordinate(),
        Some(Coordinate::Float(-34.25))
    );
    assert_eq!(
        Value::string("18446744073709551615").as_coordinate(),
        Some(Coordinate::UInt(u64::MAX))
    );
    assert_eq!(Value::string("north").as_coordinate(), None);
    assert_eq!(Value::string("").as_coordinate(), None);
}

#[test]
fn coordinate_parse_rejects_non_finite_text() {
    for text in ["NaN", "nan", "inf", "-infinity"] {
        assert_eq!(Coordinate::parse(text), None, "{text}");
    }
    assert_eq!(Coordinate::parse("12.5"), Some(Coordinate::Float(12.5)));
}

#[test]
fn coordinate_display_keeps_integers_exact() {
    assert_eq!(Coordinate::Int(i64::MAX).to_string(), "9223372036854775807");
    assert_eq!(Coordinate::Float(12.0).to_string(), "12");
    assert_eq!(Coordinate::Float(-34.25).to_string(), "-34.25");
    assert!(!Coordinate::Float(f64::NAN).is_finite());
    assert!(Coordinate::UInt(u64::MAX).is_finite());
}

#[test]
fn point_new_uses_little_endian_point_header() {
    let point = Point::new(1.0, 2.0);
    assert_eq!(point.byte_order, 1);
    assert_eq!(point.geometry_type, 1);
    assert_eq!(point.srid, 0);
    assert_eq!(point.coordinates(), [1.0, 2.0]);
}

#[test]
fn geometry_literal_renders_constructor_call() {
    let literal = GeometryLiteral::new("POINT(12 34)");
    assert_eq!(literal.to_sql(), "ST_GeomFromText('POINT(12 34)')");
    assert_eq!(literal.to_string(), literal.to_sql());

    let custom = literal.with_constructor(GeometryConstructor::from("GeomFromText"));
    assert_eq!(custom.to_sql(), "GeomFromText('POINT(12 34)')");
}

#[test]
fn geometry_literal_escapes_quotes() {
    let literal = GeometryLiteral::new("it's");
    assert_eq!(literal.to_sql(), "ST_GeomFromText('it''s')");
}

#[test]
fn geometry_constructor_known_name_maps_to_default() {
    assert_eq!(
        GeometryConstructor::from("ST_GeomFromText"),
        GeometryConstructor::GeomFromText
    );
}

#[test]
fn geometry_kind_round_trips_tags() {
    for tag in ["geometry", "point", "linestring", "polygon", "multipoint"] {
        let kind = GeometryKind::from(tag);
        assert_eq!(kind.as_str(), tag);
        assert_eq!(kind.to_string(), tag);
    }
    assert_eq!(GeometryKind::from("POINT"), GeometryKind::Unknown("POINT".into()));
    assert_eq!(GeometryKind::LineString.wkt_tag(), "LINESTRING");
}

#[test]
fn default_type_set_lists_database_geospatial_types() {
    let types = GeospatialTypes::default();
    assert_eq!(types.len(), 4);
    for tag in GeospatialTypes::DEFAULT_TAGS {
        assert!(types.contains(tag));
    }
    assert!(!types.contains("integer"));
    assert!(!types.is_empty());
    assert!(GeospatialTypes::empty().is_empty());
}

#[test]
fn schema_descriptor_lookup() {
    let schema = SchemaDescriptor::new().with_field("location", "point");
    assert_eq!(schema.type_of("location"), Some("point"));
    assert_eq!(schema.type_of("missing"), None);
    assert!(schema.contains_field("location"));
    assert_eq!(schema.len(), 1);
    assert!(!schema.is_empty());
    assert!(SchemaDescriptor::new().is_empty());
}
