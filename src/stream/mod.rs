//! Object stream handling
//!
//! Turns the raw text captured from a generator invocation into discrete
//! JSON object strings and, when keying is requested, into key/record pairs.
//!
//! # Overview
//!
//! - `split_json_objects` - split a concatenated blob into ordered objects
//! - `split_json_objects_strict` - same scan, but unbalanced braces error
//! - `pair_key_values` - pair alternating key/record emissions and splice
//!   the key's field into the record text

mod pairer;
mod splitter;

pub use pairer::{pair_key_values, KeyedObject};
pub use splitter::{split_json_objects, split_json_objects_strict};

#[cfg(test)]
mod tests;
