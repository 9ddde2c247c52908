//! Canonical schema model
//!
//! The single normalized schema representation all three inference formats
//! converge to, plus one `normalize` adapter per source format. The model
//! is a closed sum type; adapters match exhaustively so a missing case is
//! a compile error, not a runtime surprise.

mod normalize;
mod types;

pub use normalize::{normalize_descriptor, normalize_document, normalize_record};
pub use types::{CanonicalField, CanonicalSchema, PrimitiveKind};
