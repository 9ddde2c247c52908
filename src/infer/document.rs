//! Document-style schema inference
//!
//! Produces a JSON-Schema-shaped tree. Untyped numbers always infer as the
//! generic `number` kind; the `integer` kind exists only for schemas that
//! arrive with an explicit format hint and is never produced by inference
//! over current generator output. Null and otherwise-unsupported fields are
//! dropped from the property set.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::Result;

use super::require_root_object;

/// Document-style format schema node
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum DocumentSchema {
    String,
    Boolean,
    /// Generic number, optionally narrowed by a `format` hint ("float")
    Number { format: Option<String> },
    /// Integer, optionally narrowed by a `format` hint ("int32").
    /// Never produced by inference; see module docs.
    Integer { format: Option<String> },
    /// Explicit null type
    Null,
    /// Object with ordered properties
    Object {
        /// Property schemas keyed by name, in source order
        properties: IndexMap<String, DocumentSchema>,
    },
    /// Array; `items` is absent when there was no element to probe
    Array { items: Option<Box<DocumentSchema>> },
}

/// Infer a document-style schema from a JSON object.
///
/// The result is always an `Object` node whose properties mirror the input
/// fields in order. Array items are probed from the first element only; an
/// empty array yields an array node with no items slot.
pub fn infer_document_schema(json: &Value) -> Result<DocumentSchema> {
    let map = require_root_object(json)?;
    Ok(DocumentSchema::Object {
        properties: collect_properties(map),
    })
}

fn collect_properties(map: &serde_json::Map<String, Value>) -> IndexMap<String, DocumentSchema> {
    let mut properties = IndexMap::new();
    for (name, value) in map {
        if let Some(node) = property_for(value) {
            properties.insert(name.clone(), node);
        }
    }
    properties
}

fn property_for(value: &Value) -> Option<DocumentSchema> {
    match value {
        Value::String(_) => Some(DocumentSchema::String),
        Value::Bool(_) => Some(DocumentSchema::Boolean),
        // No int/float distinction at inference time.
        Value::Number(_) => Some(DocumentSchema::Number { format: None }),
        Value::Object(map) => Some(DocumentSchema::Object {
            properties: collect_properties(map),
        }),
        Value::Array(items) => Some(DocumentSchema::Array {
            items: items.first().and_then(property_for).map(Box::new),
        }),
        Value::Null => None,
    }
}
