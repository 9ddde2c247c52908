//! JSON object stream splitting

use crate::error::{Error, Result};

/// Split a flat text blob into ordered JSON object substrings.
///
/// The input is zero or more JSON object texts concatenated with no
/// delimiter (the caller strips newlines first). The scan keeps a
/// brace-depth counter: a surplus `{` at depth zero flushes any pending
/// buffer and opens a new object, and the buffer is flushed whenever the
/// depth returns to zero.
///
/// Braces inside string literals are not recognized, and unbalanced input
/// does not error: an unclosed trailing object is never flushed and is
/// silently dropped, while a stray close brace garbles the object it lands
/// in. Use [`split_json_objects_strict`] when that should surface instead.
pub fn split_json_objects(text: &str) -> Vec<String> {
    let mut objects = Vec::new();
    let mut depth: i64 = 0;
    let mut current = String::new();

    for c in text.chars() {
        if c == '{' {
            if depth == 0 && !current.is_empty() {
                objects.push(std::mem::take(&mut current));
            }
            depth += 1;
        }
        if c == '}' {
            depth -= 1;
        }
        current.push(c);
        if depth == 0 && !current.is_empty() {
            objects.push(std::mem::take(&mut current));
        }
    }

    objects
}

/// Stricter variant of [`split_json_objects`].
///
/// Performs the same single-pass scan but returns
/// [`Error::MalformedInput`] when a `}` appears with no open object or
/// when the input ends inside an unclosed object.
pub fn split_json_objects_strict(text: &str) -> Result<Vec<String>> {
    let mut depth: i64 = 0;

    for (pos, c) in text.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return Err(Error::malformed_input(format!(
                        "unmatched '}}' at byte {pos}"
                    )));
                }
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(Error::malformed_input(format!(
            "{depth} unclosed object(s) at end of input"
        )));
    }

    Ok(split_json_objects(text))
}
