//! Materialized record values

use indexmap::IndexMap;
use serde::Serialize;

/// A materialized value mirroring a canonical schema's shape.
///
/// Struct and map entries keep their insertion order, matching the field
/// order of the schema (structs) or the source JSON (maps).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
#[allow(missing_docs)]
pub enum RecordValue {
    Null,
    Boolean(bool),
    Int32(i32),
    Int64(i64),
    Float32(f32),
    Float64(f64),
    String(String),
    Bytes(Vec<u8>),
    Struct(IndexMap<String, RecordValue>),
    Array(Vec<RecordValue>),
    Map(IndexMap<String, RecordValue>),
}

impl RecordValue {
    /// Fetch a struct or map entry by name
    pub fn get(&self, name: &str) -> Option<&RecordValue> {
        match self {
            RecordValue::Struct(entries) | RecordValue::Map(entries) => entries.get(name),
            _ => None,
        }
    }

    /// The string payload, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RecordValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integral payload widened to i64, if this is an int value
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            RecordValue::Int32(v) => Some(i64::from(*v)),
            RecordValue::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// The boolean payload, if this is a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RecordValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether this is the null value
    pub fn is_null(&self) -> bool {
        matches!(self, RecordValue::Null)
    }
}
