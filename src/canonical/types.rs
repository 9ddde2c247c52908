//! Canonical schema types

use serde::Serialize;

/// Primitive kinds in the canonical model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum PrimitiveKind {
    String,
    Int32,
    Int64,
    Float32,
    Float64,
    Boolean,
    Bytes,
}

impl std::fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrimitiveKind::String => write!(f, "string"),
            PrimitiveKind::Int32 => write!(f, "int32"),
            PrimitiveKind::Int64 => write!(f, "int64"),
            PrimitiveKind::Float32 => write!(f, "float32"),
            PrimitiveKind::Float64 => write!(f, "float64"),
            PrimitiveKind::Boolean => write!(f, "boolean"),
            PrimitiveKind::Bytes => write!(f, "bytes"),
        }
    }
}

/// One declared field of a canonical struct.
///
/// `optional` controls materialization of an absent JSON field: optional
/// fields are populated as null, required absent fields are simply omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalField {
    /// Field name, unique within its struct
    pub name: String,
    /// Schema of the field's value
    pub schema: CanonicalSchema,
    /// Whether an absent JSON field materializes as null
    pub optional: bool,
}

/// The canonical schema: a finite, acyclic tagged variant.
///
/// Invariants: struct fields preserve source JSON key order and are unique
/// within one struct; map keys are always strings. Nullability is not a
/// type-level concern here; it lives on [`CanonicalField::optional`] only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalSchema {
    /// A single primitive kind
    Primitive(PrimitiveKind),
    /// Ordered named fields, optionally titled
    Struct {
        /// Type name, absent for anonymous structs
        name: Option<String>,
        /// Declared fields in source order
        fields: Vec<CanonicalField>,
    },
    /// Homogeneous array of one element schema
    Array(Box<CanonicalSchema>),
    /// String-keyed map; only the value schema varies
    Map(Box<CanonicalSchema>),
}

impl CanonicalSchema {
    /// Shorthand for a primitive schema
    pub fn primitive(kind: PrimitiveKind) -> Self {
        CanonicalSchema::Primitive(kind)
    }

    /// Look up a declared struct field by name
    pub fn field(&self, name: &str) -> Option<&CanonicalField> {
        match self {
            CanonicalSchema::Struct { fields, .. } => fields.iter().find(|f| f.name == name),
            _ => None,
        }
    }

    /// Declared struct field names in order, empty for non-structs
    pub fn field_names(&self) -> Vec<&str> {
        match self {
            CanonicalSchema::Struct { fields, .. } => {
                fields.iter().map(|f| f.name.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Whether this schema is the given primitive kind
    pub fn is_primitive(&self, kind: PrimitiveKind) -> bool {
        matches!(self, CanonicalSchema::Primitive(k) if *k == kind)
    }
}
