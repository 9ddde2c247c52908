//! Engine output types

use serde::Serialize;

use crate::canonical::CanonicalSchema;
use crate::record::RecordValue;

/// A schema and its materialized value, for formats that produce one
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypedRecord {
    /// Canonical schema derived for this record's shape
    pub schema: CanonicalSchema,
    /// Value tree materialized against that schema
    pub value: RecordValue,
}

/// One ordered emission from a generator invocation.
///
/// Text-only collaborators read `key`/`value`; typed collaborators read
/// `typed`, which is populated for every format except plain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceEvent {
    /// Raw key object text, unparsed (`None` when keying is off)
    pub key: Option<String>,
    /// Record text, spliced when keyed
    pub value: String,
    /// Schema and materialized record for non-plain formats
    pub typed: Option<TypedRecord>,
}
