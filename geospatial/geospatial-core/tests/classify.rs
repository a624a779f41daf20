use geospatial_core::{GeometryKind, GeospatialTypes, SchemaDescriptor, classify, classify_default};

fn mixed_schema() -> SchemaDescriptor {
    SchemaDescriptor::new()
        .with_field("id", "integer")
        .with_field("name", "string")
        .with_field("location", "point")
        .with_field("route", "linestring")
        .with_field("shape", "polygon")
}

#[test]
fn classify_keeps_only_geospatial_fields() {
    let candidates = classify_default(&mixed_schema());
    assert_eq!(candidates.len(), 3);
    assert_eq!(candidates.get("location"), Some(&GeometryKind::Point));
    assert_eq!(candidates.get("route"), Some(&GeometryKind::LineString));
    assert_eq!(candidates.get("shape"), Some(&GeometryKind::Polygon));
    assert!(!candidates.contains_key("id"));
}

#[test]
fn classified_fields_are_schema_fields_with_member_tags() {
    let schema = mixed_schema();
    let types = GeospatialTypes::empty().with_type("point").with_type("custom_geo");
    let schema = schema.with_field("area", "custom_geo");

    let candidates = classify(&schema, &types);
    for (name, kind) in candidates.iter() {
        assert_eq!(schema.type_of(name), Some(kind.as_str()));
        assert!(types.contains(kind.as_str()));
    }
    assert_eq!(candidates.len(), 2);
    assert_eq!(
        candidates.get("area"),
        Some(&GeometryKind::Unknown("custom_geo".to_string()))
    );
}

#[test]
fn classify_empty_schema_is_empty() {
    assert!(classify_default(&SchemaDescriptor::new()).is_empty());
}

#[test]
fn classify_non_geospatial_schema_is_empty() {
    let schema: SchemaDescriptor = [("id", "integer"), ("name", "string")]
        .into_iter()
        .collect();
    assert!(classify_default(&schema).is_empty());
}

#[test]
fn classify_membership_is_case_sensitive() {
    let schema = SchemaDescriptor::new()
        .with_field("a", "POINT")
        .with_field("b", "Point")
        .with_field("c", "point");
    let candidates = classify_default(&schema);
    assert_eq!(candidates.len(), 1);
    assert!(candidates.contains_key("c"));
}

#[test]
fn classify_with_empty_type_set_is_empty() {
    assert!(classify(&mixed_schema(), &GeospatialTypes::empty()).is_empty());
}

#[test]
fn sorted_candidates_are_ordered_by_name() {
    let candidates = classify_default(&mixed_schema());
    let names: Vec<_> = candidates.sorted().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["location", "route", "shape"]);
}
