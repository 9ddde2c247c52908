//! Record materialization
//!
//! Populates a canonical-schema-shaped value tree from raw JSON. A record
//! is created once per input object and schema pair and handed straight to
//! the caller; nothing here retains state across calls.

mod materialize;
mod types;

pub use materialize::materialize;
pub use types::RecordValue;

#[cfg(test)]
mod tests;
