//! Common types shared across modules

use serde::{Deserialize, Serialize};

/// Target schema format for generator output
///
/// Selects how (and whether) a typed schema is inferred from each emitted
/// JSON object before the record is handed downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SchemaFormat {
    /// Pass the raw record text through untyped (default)
    #[default]
    Plain,
    /// Named-record binary-schema style (record types with typed fields)
    Record,
    /// JSON-Schema style (`type`/`properties`/`items` documents)
    Document,
    /// Numbered-field descriptor style (nested message types)
    Descriptor,
}

impl std::fmt::Display for SchemaFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaFormat::Plain => write!(f, "plain"),
            SchemaFormat::Record => write!(f, "record"),
            SchemaFormat::Document => write!(f, "document"),
            SchemaFormat::Descriptor => write!(f, "descriptor"),
        }
    }
}

impl std::str::FromStr for SchemaFormat {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(SchemaFormat::Plain),
            "record" => Ok(SchemaFormat::Record),
            "document" => Ok(SchemaFormat::Document),
            "descriptor" => Ok(SchemaFormat::Descriptor),
            other => Err(crate::error::Error::invalid_value(
                "format",
                format!("unknown schema format '{other}'"),
            )),
        }
    }
}
