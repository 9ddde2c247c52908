//! # datagen-source
//!
//! Schema inference and record materialization for generator-produced JSON
//! streams. Takes the loosely-structured text an external data generator
//! emits and turns it into typed, schema-conformant records for a
//! downstream pipeline.
//!
//! ## Features
//!
//! - **Object Stream Splitting**: Split concatenated JSON object texts
//! - **Key/Value Pairing**: Splice generated keys into their records
//! - **Schema Inference**: Record-style, document-style and
//!   descriptor-style engines over one recursive-descent strategy
//! - **Canonical Schema Model**: One normalized representation for all
//!   three formats
//! - **Record Materialization**: Typed value trees populated from raw JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use datagen_source::engine::SourceEngine;
//! use datagen_source::types::SchemaFormat;
//!
//! let engine = SourceEngine::new("net_device").with_format(SchemaFormat::Record);
//! let events = engine.process("{\"name\":\"r1\",\"port\":443}").unwrap();
//!
//! let typed = events[0].typed.as_ref().unwrap();
//! assert_eq!(typed.schema.field_names(), vec!["name", "port"]);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! raw text ──▶ stream::split ──▶ stream::pair ──▶ (key, record text)
//!                                                       │
//!                                      per configured SchemaFormat
//!                                                       │
//!                          infer::{record,document,descriptor}
//!                                                       │
//!                          canonical::normalize_* ──▶ CanonicalSchema
//!                                                       │
//!                          record::materialize ──▶ (schema, value)
//! ```
//!
//! Everything is synchronous and stateless: each call owns its
//! intermediate trees, so callers may invoke the engine concurrently
//! without coordination.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Generator source configuration
pub mod config;

/// Generator command construction
pub mod command;

/// Object stream splitting and key/value pairing
pub mod stream;

/// Format-specific schema inference
pub mod infer;

/// Canonical schema model and normalization adapters
pub mod canonical;

/// Record materialization
pub mod record;

/// Per-invocation source pipeline
pub mod engine;

// ============================================================================
// Re-exports
// ============================================================================

pub use canonical::{CanonicalField, CanonicalSchema, PrimitiveKind};
pub use config::GeneratorConfig;
pub use engine::{SourceEngine, SourceEvent, TypedRecord};
pub use error::{Error, Result};
pub use record::RecordValue;
pub use types::SchemaFormat;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
