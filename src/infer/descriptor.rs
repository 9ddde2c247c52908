//! Descriptor-style schema inference
//!
//! Builds a message descriptor with numbered fields. Numbering is
//! per-message, ascends from 1 in key-iteration order, and restarts for
//! each nested message. Values that are not string/int32/int64/boolean/
//! object are skipped entirely and consume no field number; floating-point
//! fields in particular are silently dropped. That drop is load-bearing
//! for wire compatibility with existing consumers and must not be turned
//! into an error.

use serde_json::Value;

use crate::error::Result;

use super::require_root_object;

/// Field type within a message descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum FieldType {
    String,
    Int32,
    Int64,
    Bool,
    /// References a nested message via [`FieldDescriptor::type_name`]
    Message,
}

/// One numbered field of a message descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name
    pub name: String,
    /// Field number, ascending from 1 within its message
    pub number: i32,
    /// Wire type of the field
    pub field_type: FieldType,
    /// Qualified name of the referenced message type, for `Message` fields
    pub type_name: Option<String>,
}

/// Descriptor-style format schema: a named message with numbered fields
/// and locally nested message definitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDescriptor {
    /// Message type name
    pub name: String,
    /// Numbered fields in source order
    pub fields: Vec<FieldDescriptor>,
    /// Locally nested message definitions
    pub nested_types: Vec<MessageDescriptor>,
}

impl MessageDescriptor {
    /// Look up a locally nested message by the suffix of a qualified type
    /// name (the part after the last `.`).
    pub fn find_nested(&self, type_name: &str) -> Option<&MessageDescriptor> {
        let local = type_name.rsplit('.').next().unwrap_or(type_name);
        self.nested_types.iter().find(|n| n.name == local)
    }
}

/// Infer a descriptor-style schema from a JSON object.
pub fn infer_descriptor_schema(message_name: &str, json: &Value) -> Result<MessageDescriptor> {
    let map = require_root_object(json)?;
    Ok(build_message(message_name, map))
}

fn build_message(name: &str, map: &serde_json::Map<String, Value>) -> MessageDescriptor {
    let mut fields = Vec::new();
    let mut nested_types = Vec::new();
    let mut number = 1;

    for (field_name, value) in map {
        let (field_type, type_name) = match value {
            Value::String(_) => (FieldType::String, None),
            Value::Number(n) if fits_int32(n) => (FieldType::Int32, None),
            Value::Number(n) if n.is_i64() || n.is_u64() => (FieldType::Int64, None),
            Value::Bool(_) => (FieldType::Bool, None),
            Value::Object(nested_map) => {
                nested_types.push(build_message(field_name, nested_map));
                (
                    FieldType::Message,
                    Some(format!(".{name}.{field_name}")),
                )
            }
            // Floats, nulls and arrays are dropped; no number is consumed.
            _ => continue,
        };

        fields.push(FieldDescriptor {
            name: field_name.clone(),
            number,
            field_type,
            type_name,
        });
        number += 1;
    }

    MessageDescriptor {
        name: name.to_string(),
        fields,
        nested_types,
    }
}

fn fits_int32(n: &serde_json::Number) -> bool {
    n.as_i64()
        .is_some_and(|v| i32::try_from(v).is_ok())
}
