//! Record-style schema inference
//!
//! Walks an object's fields in order and maps each JSON value to a typed
//! field of a named record. Nested objects become nested record types named
//! after their field; arrays take their element type from the first element
//! only. Both policies are stable contracts: downstream schemas must not
//! change shape between runs over equally-shaped input.

use crate::error::Result;
use serde_json::Value;

use super::require_root_object;

/// Record-style format schema
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum RecordSchema {
    Null,
    Boolean,
    Int32,
    Int64,
    Float32,
    Float64,
    Bytes,
    String,
    /// Named record type with ordered fields
    Record {
        /// Record type name
        name: String,
        /// Typed fields in source order
        fields: Vec<RecordField>,
    },
    /// Array with a single element type
    Array(Box<RecordSchema>),
    /// String-keyed map
    Map(Box<RecordSchema>),
    /// Union of member types
    Union(Vec<RecordSchema>),
}

/// One named field of a record type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordField {
    /// Field name
    pub name: String,
    /// Inferred field schema
    pub schema: RecordSchema,
}

/// Infer a record-style schema from a JSON object.
///
/// Type mapping: string, integral fitting 32 bits, wider integral, boolean
/// map to their primitive kinds; other numbers map to float64; nested
/// objects recurse into records named after the field; arrays probe only
/// their first element and empty arrays default to string items; anything
/// else gets the nullable-string fallback union.
pub fn infer_record_schema(record_name: &str, json: &Value) -> Result<RecordSchema> {
    let map = require_root_object(json)?;
    Ok(build_record(record_name, map))
}

fn build_record(name: &str, map: &serde_json::Map<String, Value>) -> RecordSchema {
    let fields = map
        .iter()
        .map(|(field_name, value)| RecordField {
            name: field_name.clone(),
            schema: infer_field(field_name, value),
        })
        .collect();

    RecordSchema::Record {
        name: name.to_string(),
        fields,
    }
}

fn infer_field(field_name: &str, value: &Value) -> RecordSchema {
    match value {
        Value::String(_) => RecordSchema::String,
        Value::Number(n) if fits_int32(n) => RecordSchema::Int32,
        Value::Number(n) if n.is_i64() || n.is_u64() => RecordSchema::Int64,
        Value::Number(_) => RecordSchema::Float64,
        Value::Bool(_) => RecordSchema::Boolean,
        Value::Object(map) => build_record(field_name, map),
        Value::Array(items) => match items.first() {
            Some(first) => RecordSchema::Array(Box::new(element_schema(field_name, first))),
            // Empty arrays default to string items.
            None => RecordSchema::Array(Box::new(RecordSchema::String)),
        },
        // Nullable-string fallback for values no rule covers.
        Value::Null => RecordSchema::Union(vec![RecordSchema::Null, RecordSchema::String]),
    }
}

/// Element type for an array field, probed from the first element only.
/// Unlike field inference, the fallback here is a plain string.
fn element_schema(field_name: &str, element: &Value) -> RecordSchema {
    match element {
        Value::String(_) => RecordSchema::String,
        Value::Number(n) if fits_int32(n) => RecordSchema::Int32,
        Value::Number(n) if n.is_i64() || n.is_u64() => RecordSchema::Int64,
        Value::Number(_) => RecordSchema::Float64,
        Value::Bool(_) => RecordSchema::Boolean,
        Value::Object(map) => build_record(field_name, map),
        _ => RecordSchema::String,
    }
}

fn fits_int32(n: &serde_json::Number) -> bool {
    n.as_i64()
        .is_some_and(|v| i32::try_from(v).is_ok())
}
