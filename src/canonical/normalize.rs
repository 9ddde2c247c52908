//! Format-specific schema normalization
//!
//! One adapter per inference format. All three are deterministic functions
//! of their input: a failure here will fail identically on retry, so errors
//! are surfaced as typed failures and never coerced to a default schema.

use crate::error::{Error, Result};
use crate::infer::{
    DocumentSchema, FieldDescriptor, FieldType, MessageDescriptor, RecordField, RecordSchema,
};

use super::types::{CanonicalField, CanonicalSchema, PrimitiveKind};

// ============================================================================
// Record-style
// ============================================================================

/// Normalize a record-style schema into the canonical model.
///
/// Primitive kinds map 1:1. A union of exactly `{null, T}` normalizes to
/// `T`; a wider union normalizes to its first non-null member. Both
/// tie-breaks are stable contracts inherited from the source format.
pub fn normalize_record(schema: &RecordSchema) -> Result<CanonicalSchema> {
    match schema {
        RecordSchema::String => Ok(CanonicalSchema::primitive(PrimitiveKind::String)),
        RecordSchema::Int32 => Ok(CanonicalSchema::primitive(PrimitiveKind::Int32)),
        RecordSchema::Int64 => Ok(CanonicalSchema::primitive(PrimitiveKind::Int64)),
        RecordSchema::Float32 => Ok(CanonicalSchema::primitive(PrimitiveKind::Float32)),
        RecordSchema::Float64 => Ok(CanonicalSchema::primitive(PrimitiveKind::Float64)),
        RecordSchema::Boolean => Ok(CanonicalSchema::primitive(PrimitiveKind::Boolean)),
        RecordSchema::Bytes => Ok(CanonicalSchema::primitive(PrimitiveKind::Bytes)),
        RecordSchema::Record { name, fields } => Ok(CanonicalSchema::Struct {
            name: Some(name.clone()),
            fields: fields
                .iter()
                .map(normalize_record_field)
                .collect::<Result<Vec<_>>>()?,
        }),
        RecordSchema::Array(element) => {
            Ok(CanonicalSchema::Array(Box::new(normalize_record(element)?)))
        }
        RecordSchema::Map(value) => Ok(CanonicalSchema::Map(Box::new(normalize_record(value)?))),
        RecordSchema::Union(members) => normalize_union(members),
        RecordSchema::Null => Err(Error::unsupported_shape(
            "bare null type outside a union".to_string(),
        )),
    }
}

fn normalize_record_field(field: &RecordField) -> Result<CanonicalField> {
    Ok(CanonicalField {
        name: field.name.clone(),
        schema: normalize_record(&field.schema)?,
        optional: false,
    })
}

fn normalize_union(members: &[RecordSchema]) -> Result<CanonicalSchema> {
    // First non-null member wins, which also covers the {null, T} case.
    members
        .iter()
        .find(|m| !matches!(m, RecordSchema::Null))
        .map(normalize_record)
        .unwrap_or_else(|| {
            Err(Error::unsupported_shape(
                "union with no non-null member".to_string(),
            ))
        })
}

// ============================================================================
// Document-style
// ============================================================================

/// Normalize a document-style schema into the canonical model.
///
/// `number` and `integer` kinds honor their optional `format` hints
/// ("float" and "int32" respectively, wider otherwise). The `null` kind
/// has no canonical counterpart and becomes an optional string primitive,
/// with the optionality recorded on the enclosing field.
pub fn normalize_document(schema: &DocumentSchema) -> Result<CanonicalSchema> {
    match schema {
        DocumentSchema::String => Ok(CanonicalSchema::primitive(PrimitiveKind::String)),
        DocumentSchema::Boolean => Ok(CanonicalSchema::primitive(PrimitiveKind::Boolean)),
        DocumentSchema::Number { format } => Ok(CanonicalSchema::primitive(
            if format.as_deref() == Some("float") {
                PrimitiveKind::Float32
            } else {
                PrimitiveKind::Float64
            },
        )),
        DocumentSchema::Integer { format } => Ok(CanonicalSchema::primitive(
            if format.as_deref() == Some("int32") {
                PrimitiveKind::Int32
            } else {
                PrimitiveKind::Int64
            },
        )),
        DocumentSchema::Null => Ok(CanonicalSchema::primitive(PrimitiveKind::String)),
        DocumentSchema::Object { properties } => Ok(CanonicalSchema::Struct {
            name: None,
            fields: properties
                .iter()
                .map(|(name, node)| {
                    Ok(CanonicalField {
                        name: name.clone(),
                        schema: normalize_document(node)?,
                        optional: matches!(node, DocumentSchema::Null),
                    })
                })
                .collect::<Result<Vec<_>>>()?,
        }),
        DocumentSchema::Array { items } => match items {
            Some(element) => Ok(CanonicalSchema::Array(Box::new(normalize_document(
                element,
            )?))),
            None => Err(Error::EmptyArraySchema),
        },
    }
}

// ============================================================================
// Descriptor-style
// ============================================================================

/// Normalize a descriptor-style message into the canonical model.
///
/// Primitive field types map through a small fixed table. Message-typed
/// fields resolve their referenced type name against the message's locally
/// nested definitions (suffix match on the qualified name); a reference
/// that matches nothing silently omits the field, preserving the source
/// format's behavior. A message-typed field carrying no reference at all
/// cannot come from inference and is an error.
pub fn normalize_descriptor(message: &MessageDescriptor) -> Result<CanonicalSchema> {
    let mut fields = Vec::with_capacity(message.fields.len());

    for field in &message.fields {
        match field.field_type {
            FieldType::Message => {
                let type_name = field
                    .type_name
                    .as_deref()
                    .ok_or_else(|| Error::unresolved_reference(field.name.clone()))?;
                if let Some(nested) = message.find_nested(type_name) {
                    fields.push(CanonicalField {
                        name: field.name.clone(),
                        schema: normalize_descriptor(nested)?,
                        optional: false,
                    });
                }
                // No local match: field is omitted.
            }
            FieldType::String => fields.push(primitive_descriptor_field(field, PrimitiveKind::String)),
            FieldType::Int32 => fields.push(primitive_descriptor_field(field, PrimitiveKind::Int32)),
            FieldType::Int64 => fields.push(primitive_descriptor_field(field, PrimitiveKind::Int64)),
            FieldType::Bool => {
                fields.push(primitive_descriptor_field(field, PrimitiveKind::Boolean));
            }
        }
    }

    Ok(CanonicalSchema::Struct {
        name: Some(message.name.clone()),
        fields,
    })
}

fn primitive_descriptor_field(field: &FieldDescriptor, kind: PrimitiveKind) -> CanonicalField {
    CanonicalField {
        name: field.name.clone(),
        schema: CanonicalSchema::primitive(kind),
        optional: false,
    }
}
