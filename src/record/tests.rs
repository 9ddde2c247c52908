//! Materialization tests

use super::*;
use crate::canonical::{normalize_record, CanonicalField, CanonicalSchema, PrimitiveKind};
use crate::error::Error;
use crate::infer::infer_record_schema;
use pretty_assertions::assert_eq;
use serde_json::json;

fn struct_schema(fields: Vec<(&str, CanonicalSchema, bool)>) -> CanonicalSchema {
    CanonicalSchema::Struct {
        name: None,
        fields: fields
            .into_iter()
            .map(|(name, schema, optional)| CanonicalField {
                name: name.to_string(),
                schema,
                optional,
            })
            .collect(),
    }
}

#[test]
fn test_materialize_primitives() {
    let schema = struct_schema(vec![
        ("s", CanonicalSchema::primitive(PrimitiveKind::String), false),
        ("i", CanonicalSchema::primitive(PrimitiveKind::Int32), false),
        ("l", CanonicalSchema::primitive(PrimitiveKind::Int64), false),
        ("f", CanonicalSchema::primitive(PrimitiveKind::Float64), false),
        ("b", CanonicalSchema::primitive(PrimitiveKind::Boolean), false),
    ]);
    let json = json!({"s": "x", "i": 7, "l": 5_000_000_000i64, "f": 0.25, "b": true});

    let record = materialize(&schema, &json).unwrap();

    assert_eq!(record.get("s"), Some(&RecordValue::String("x".to_string())));
    assert_eq!(record.get("i"), Some(&RecordValue::Int32(7)));
    assert_eq!(record.get("l"), Some(&RecordValue::Int64(5_000_000_000)));
    assert_eq!(record.get("f"), Some(&RecordValue::Float64(0.25)));
    assert_eq!(record.get("b"), Some(&RecordValue::Boolean(true)));
}

#[test]
fn test_materialize_numeric_width_coercion() {
    // Numeric kinds read the JSON number at the declared width; fractional
    // values truncate toward zero for integer kinds.
    let schema = struct_schema(vec![
        ("i", CanonicalSchema::primitive(PrimitiveKind::Int32), false),
        ("f", CanonicalSchema::primitive(PrimitiveKind::Float32), false),
    ]);
    let json = json!({"i": 3.9, "f": 2});

    let record = materialize(&schema, &json).unwrap();

    assert_eq!(record.get("i"), Some(&RecordValue::Int32(3)));
    assert_eq!(record.get("f"), Some(&RecordValue::Float32(2.0)));
}

#[test]
fn test_materialize_type_mismatch() {
    let schema = struct_schema(vec![(
        "flag",
        CanonicalSchema::primitive(PrimitiveKind::Boolean),
        false,
    )]);
    let json = json!({"flag": "yes"});

    let err = materialize(&schema, &json).unwrap_err();
    match err {
        Error::TypeMismatch { expected, found } => {
            assert_eq!(expected, "boolean");
            assert_eq!(found, "string");
        }
        other => panic!("expected TypeMismatch, got {other}"),
    }
}

#[test]
fn test_materialize_string_requires_exact_match() {
    let schema = struct_schema(vec![(
        "s",
        CanonicalSchema::primitive(PrimitiveKind::String),
        false,
    )]);

    assert!(materialize(&schema, &json!({"s": 1})).is_err());
}

#[test]
fn test_materialize_absent_required_field_is_omitted() {
    let schema = struct_schema(vec![
        ("present", CanonicalSchema::primitive(PrimitiveKind::String), false),
        ("absent", CanonicalSchema::primitive(PrimitiveKind::String), false),
    ]);
    let json = json!({"present": "x"});

    let record = materialize(&schema, &json).unwrap();

    assert!(record.get("present").is_some());
    assert!(record.get("absent").is_none());
}

#[test]
fn test_materialize_absent_optional_field_is_null() {
    let schema = struct_schema(vec![(
        "maybe",
        CanonicalSchema::primitive(PrimitiveKind::String),
        true,
    )]);
    let json = json!({});

    let record = materialize(&schema, &json).unwrap();

    assert_eq!(record.get("maybe"), Some(&RecordValue::Null));
}

#[test]
fn test_materialize_null_optional_field_is_null() {
    let schema = struct_schema(vec![(
        "maybe",
        CanonicalSchema::primitive(PrimitiveKind::String),
        true,
    )]);
    let json = json!({"maybe": null});

    let record = materialize(&schema, &json).unwrap();

    assert_eq!(record.get("maybe"), Some(&RecordValue::Null));
}

#[test]
fn test_materialize_struct_walks_schema_order() {
    let schema = struct_schema(vec![
        ("b", CanonicalSchema::primitive(PrimitiveKind::Int32), false),
        ("a", CanonicalSchema::primitive(PrimitiveKind::Int32), false),
    ]);
    let json = json!({"a": 1, "b": 2});

    let record = materialize(&schema, &json).unwrap();
    let RecordValue::Struct(entries) = record else {
        panic!("expected struct value");
    };

    let keys: Vec<_> = entries.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["b", "a"]);
}

#[test]
fn test_materialize_array_recurses_in_order() {
    let schema = CanonicalSchema::Array(Box::new(CanonicalSchema::primitive(PrimitiveKind::Int32)));
    let json = json!([3, 1, 2]);

    let record = materialize(&schema, &json).unwrap();

    assert_eq!(
        record,
        RecordValue::Array(vec![
            RecordValue::Int32(3),
            RecordValue::Int32(1),
            RecordValue::Int32(2),
        ])
    );
}

#[test]
fn test_materialize_array_element_mismatch_fails() {
    let schema = CanonicalSchema::Array(Box::new(CanonicalSchema::primitive(
        PrimitiveKind::Boolean,
    )));

    assert!(materialize(&schema, &json!([true, "nope"])).is_err());
}

#[test]
fn test_materialize_map_in_json_order() {
    let schema = CanonicalSchema::Map(Box::new(CanonicalSchema::primitive(PrimitiveKind::Int64)));
    let json = json!({"z": 1, "a": 2});

    let record = materialize(&schema, &json).unwrap();
    let RecordValue::Map(entries) = record else {
        panic!("expected map value");
    };

    let keys: Vec<_> = entries.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["z", "a"]);
}

#[test]
fn test_materialize_bytes_from_string() {
    let schema = CanonicalSchema::primitive(PrimitiveKind::Bytes);
    let record = materialize(&schema, &json!("abc")).unwrap();
    assert_eq!(record, RecordValue::Bytes(b"abc".to_vec()));
}

#[test]
fn test_round_trip_primitive_record() {
    // infer -> normalize -> materialize reproduces the original field
    // values modulo declared numeric width.
    let json = json!({"name": "r1", "port": 443, "healthy": true, "load": 0.5});

    let format = infer_record_schema("DeviceRecord", &json).unwrap();
    let canonical = normalize_record(&format).unwrap();
    let record = materialize(&canonical, &json).unwrap();

    assert_eq!(record.get("name").and_then(RecordValue::as_str), Some("r1"));
    assert_eq!(record.get("port").and_then(RecordValue::as_i64), Some(443));
    assert_eq!(
        record.get("healthy").and_then(RecordValue::as_bool),
        Some(true)
    );
    assert_eq!(record.get("load"), Some(&RecordValue::Float64(0.5)));
}
