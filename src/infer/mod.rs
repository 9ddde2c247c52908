//! Schema inference from generator JSON
//!
//! Three format-specific inference engines sharing one recursive-descent
//! strategy over a parsed JSON tree:
//!
//! - **record-style** - named record types with typed fields
//! - **document-style** - `type`/`properties`/`items` documents
//! - **descriptor-style** - numbered fields and nested message types
//!
//! Each engine produces an intermediate format schema; the `canonical`
//! module normalizes all three into one representation. Inference is a pure
//! function of the input JSON: missing fields are simply absent from the
//! output schema, never defaulted.

mod descriptor;
mod document;
mod record;

pub use descriptor::{
    infer_descriptor_schema, FieldDescriptor, FieldType, MessageDescriptor,
};
pub use document::{infer_document_schema, DocumentSchema};
pub use record::{infer_record_schema, RecordField, RecordSchema};

use crate::error::{Error, Result};
use serde_json::Value;

/// Require an object at the document root, the only shape any of the
/// inference engines accepts.
fn require_root_object(json: &Value) -> Result<&serde_json::Map<String, Value>> {
    match json {
        Value::Object(map) => Ok(map),
        other => Err(Error::unsupported_shape(format!(
            "expected a JSON object at the root, found {}",
            json_shape_name(other)
        ))),
    }
}

/// Human-readable name for a JSON value's shape, used in errors.
pub(crate) fn json_shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
