//! Source engine
//!
//! The per-invocation pipeline a host calls with the text captured from a
//! generator run: newline-strip, split into objects, pair keys with
//! records, then (per configured format) parse, infer, normalize and
//! materialize each record into a typed event.
//!
//! The engine is stateless and side-effect-free: every call owns its
//! intermediate trees exclusively, so hosts may fan invocations out across
//! threads without coordination. Scheduling, process management and offset
//! persistence belong to the host, not here.

mod types;

pub use types::{SourceEvent, TypedRecord};

use serde_json::Value;
use tracing::debug;

use crate::canonical::{normalize_descriptor, normalize_document, normalize_record};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::infer::{infer_descriptor_schema, infer_document_schema, infer_record_schema};
use crate::record::materialize;
use crate::stream::{pair_key_values, split_json_objects, KeyedObject};
use crate::types::SchemaFormat;

/// Stateless pipeline over one generator invocation's output text
#[derive(Debug, Clone)]
pub struct SourceEngine {
    /// Target schema format
    format: SchemaFormat,
    /// Name used to title inferred message/record types
    message_name: String,
    /// Key field for paired emissions, when keying is requested
    key_field: Option<String>,
}

impl SourceEngine {
    /// Create an engine producing plain text events titled `message_name`
    pub fn new(message_name: impl Into<String>) -> Self {
        Self {
            format: SchemaFormat::default(),
            message_name: message_name.into(),
            key_field: None,
        }
    }

    /// Build an engine from a validated generator config
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            format: config.format,
            message_name: config.message_name().to_string(),
            key_field: config.key_field.clone(),
        }
    }

    /// Set the target schema format
    #[must_use]
    pub fn with_format(mut self, format: SchemaFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the key field for paired emissions
    #[must_use]
    pub fn with_key_field(mut self, key_field: impl Into<String>) -> Self {
        self.key_field = Some(key_field.into());
        self
    }

    /// The target schema format
    pub fn format(&self) -> SchemaFormat {
        self.format
    }

    /// Process one invocation's raw output into ordered events.
    ///
    /// The text is a newline-normalized concatenation of JSON object
    /// texts. An inference or normalization failure fails the whole call
    /// (it would fail identically on retry); a materialization failure
    /// likewise surfaces to let the caller decide whether to skip or
    /// abort, since events are built eagerly here.
    pub fn process(&self, raw: &str) -> Result<Vec<SourceEvent>> {
        let stripped: String = raw.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        let objects = split_json_objects(&stripped);
        debug!(
            objects = objects.len(),
            format = %self.format,
            "split generator output"
        );

        let paired = pair_key_values(&objects, self.key_field.as_deref())?;

        paired
            .into_iter()
            .map(|keyed| self.event_for(keyed))
            .collect()
    }

    fn event_for(&self, keyed: KeyedObject) -> Result<SourceEvent> {
        let typed = match self.format {
            SchemaFormat::Plain => None,
            SchemaFormat::Record => {
                let json: Value = serde_json::from_str(&keyed.value)?;
                let record_name = format!("{}Record", self.message_name);
                let format_schema = infer_record_schema(&record_name, &json)?;
                let schema = normalize_record(&format_schema)?;
                let value = materialize(&schema, &json)?;
                Some(TypedRecord { schema, value })
            }
            SchemaFormat::Document => {
                let json: Value = serde_json::from_str(&keyed.value)?;
                let format_schema = infer_document_schema(&json)?;
                let schema = normalize_document(&format_schema)?;
                let value = materialize(&schema, &json)?;
                Some(TypedRecord { schema, value })
            }
            SchemaFormat::Descriptor => {
                let json: Value = serde_json::from_str(&keyed.value)?;
                let format_schema = infer_descriptor_schema(&self.message_name, &json)?;
                let schema = normalize_descriptor(&format_schema)?;
                let value = materialize(&schema, &json)?;
                Some(TypedRecord { schema, value })
            }
        };

        Ok(SourceEvent {
            key: keyed.key,
            value: keyed.value,
            typed,
        })
    }
}
