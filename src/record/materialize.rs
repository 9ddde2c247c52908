//! Materialization of canonical-schema values from raw JSON

use indexmap::IndexMap;
use serde_json::Value;

use crate::canonical::{CanonicalSchema, PrimitiveKind};
use crate::error::{Error, Result};
use crate::infer::json_shape_name;

use super::types::RecordValue;

/// Materialize a typed value tree from raw JSON against a canonical schema.
///
/// Struct population walks declared fields in schema order, pulling the
/// same-named key from the JSON object. An absent or null JSON field is
/// populated as null when the canonical field is optional and silently
/// omitted otherwise, mirroring the inference layer's treatment of missing
/// fields. Arrays and maps recurse element-wise in JSON order.
///
/// Primitive coercion: numeric kinds read the JSON number at the target
/// width (fractional values truncate toward zero for integer kinds); every
/// other kind requires an exact JSON type match and fails with
/// [`Error::TypeMismatch`] otherwise. A mismatch aborts this record only.
pub fn materialize(schema: &CanonicalSchema, json: &Value) -> Result<RecordValue> {
    match schema {
        CanonicalSchema::Primitive(kind) => primitive_value(*kind, json),
        CanonicalSchema::Struct { fields, .. } => {
            let mut entries = IndexMap::with_capacity(fields.len());
            for field in fields {
                match json.get(&field.name) {
                    Some(value) if !value.is_null() => {
                        entries.insert(field.name.clone(), materialize(&field.schema, value)?);
                    }
                    _ if field.optional => {
                        entries.insert(field.name.clone(), RecordValue::Null);
                    }
                    // Required but absent: omitted, not an error.
                    _ => {}
                }
            }
            Ok(RecordValue::Struct(entries))
        }
        CanonicalSchema::Array(element) => match json {
            Value::Array(items) => Ok(RecordValue::Array(
                items
                    .iter()
                    .map(|item| materialize(element, item))
                    .collect::<Result<Vec<_>>>()?,
            )),
            // Shape drift tolerated for composites; see module docs.
            _ => Ok(RecordValue::Array(Vec::new())),
        },
        CanonicalSchema::Map(value_schema) => match json {
            Value::Object(map) => {
                let mut entries = IndexMap::with_capacity(map.len());
                for (key, value) in map {
                    entries.insert(key.clone(), materialize(value_schema, value)?);
                }
                Ok(RecordValue::Map(entries))
            }
            _ => Ok(RecordValue::Map(IndexMap::new())),
        },
    }
}

fn primitive_value(kind: PrimitiveKind, json: &Value) -> Result<RecordValue> {
    match kind {
        PrimitiveKind::String => json
            .as_str()
            .map(|s| RecordValue::String(s.to_string()))
            .ok_or_else(|| mismatch(kind, json)),
        PrimitiveKind::Boolean => json
            .as_bool()
            .map(RecordValue::Boolean)
            .ok_or_else(|| mismatch(kind, json)),
        PrimitiveKind::Int32 => number_as_i64(json)
            .map(|v| RecordValue::Int32(v as i32))
            .ok_or_else(|| mismatch(kind, json)),
        PrimitiveKind::Int64 => number_as_i64(json)
            .map(RecordValue::Int64)
            .ok_or_else(|| mismatch(kind, json)),
        PrimitiveKind::Float32 => json
            .as_f64()
            .map(|v| RecordValue::Float32(v as f32))
            .ok_or_else(|| mismatch(kind, json)),
        PrimitiveKind::Float64 => json
            .as_f64()
            .map(RecordValue::Float64)
            .ok_or_else(|| mismatch(kind, json)),
        PrimitiveKind::Bytes => json
            .as_str()
            .map(|s| RecordValue::Bytes(s.as_bytes().to_vec()))
            .ok_or_else(|| mismatch(kind, json)),
    }
}

/// Integer accessor with the source format's truncating behavior for
/// fractional numbers.
fn number_as_i64(json: &Value) -> Option<i64> {
    match json {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        _ => None,
    }
}

fn mismatch(expected: PrimitiveKind, found: &Value) -> Error {
    Error::type_mismatch(expected.to_string(), json_shape_name(found))
}
