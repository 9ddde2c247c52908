//! Key/value pairing and text-level field splicing
//!
//! The generator emits keyed runs as alternating objects: a one-field key
//! object followed by the full record. Pairing splices the key's field
//! assignment into the record's raw text. This is deliberately a textual
//! substitution, not a parse-modify-reserialize: everything outside the
//! replaced span is preserved verbatim. Callers that need a structural
//! edit should swap this function out rather than work around it.

use crate::error::{Error, Result};
use regex::{NoExpand, Regex};

/// One paired emission from the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedObject {
    /// Raw key object text, unparsed (`None` when keying is off)
    pub key: Option<String>,
    /// Record text, with the key field spliced in when keyed
    pub value: String,
}

impl KeyedObject {
    fn unkeyed(value: &str) -> Self {
        Self {
            key: None,
            value: value.to_string(),
        }
    }
}

/// Pair alternating key/record emissions and splice key fields into records.
///
/// With no `key_field` every object is a standalone value. Otherwise the
/// objects are consumed two at a time: the first of each pair is a one-field
/// key object `{"<F>": <raw-value>}`, the second is the record. The key
/// object's outer braces are stripped and the remainder replaces the
/// record's existing assignment of the same field, matched case-insensitively
/// with the pattern `"<field>":\s*"[^"]*"`. An odd trailing object with no
/// partner is dropped.
pub fn pair_key_values(objects: &[String], key_field: Option<&str>) -> Result<Vec<KeyedObject>> {
    let Some(field) = key_field.filter(|f| !f.is_empty()) else {
        return Ok(objects.iter().map(|o| KeyedObject::unkeyed(o)).collect());
    };

    let pattern = format!(r#"(?i)"{}":\s*"[^"]*""#, regex::escape(&field.to_lowercase()));
    let assignment = Regex::new(&pattern)
        .map_err(|e| Error::invalid_value("key_field", format!("bad splice pattern: {e}")))?;

    let mut paired = Vec::with_capacity(objects.len() / 2);
    for chunk in objects.chunks_exact(2) {
        let key = &chunk[0];
        let record = &chunk[1];
        let replacement = extract_replacement(key);
        // NoExpand: the key text is injected verbatim, `$` included.
        let spliced = assignment.replace_all(record, NoExpand(replacement));
        paired.push(KeyedObject {
            key: Some(key.clone()),
            value: spliced.into_owned(),
        });
    }

    Ok(paired)
}

/// Strip exactly the first and last characters of the key object text,
/// leaving the bare `"<F>": <raw-value>` assignment.
fn extract_replacement(key: &str) -> &str {
    if key.len() < 2 || !key.is_char_boundary(1) || !key.is_char_boundary(key.len() - 1) {
        return key;
    }
    &key[1..key.len() - 1]
}
