//! Generator source configuration
//!
//! Settings for one generator-backed source: which template to run, how
//! many objects per invocation, how records are keyed and which schema
//! format typed output should use. Loaded from YAML and validated before
//! use. Process invocation and poll scheduling are the host's concern;
//! this module only describes them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::SchemaFormat;

/// Message name used when the template is embedded rather than named
const EMBEDDED_MESSAGE_NAME: &str = "record";

/// Key value interval used when the config leaves it unset or zero
const DEFAULT_KEY_INTERVAL_MAX: u32 = 100;

static FIELD_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("field name pattern is valid"));

/// Configuration for a generator-backed source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Name of an existing generator template
    #[serde(default)]
    pub template: Option<String>,

    /// Inline template body, used instead of a named template
    #[serde(default)]
    pub embedded_template: Option<String>,

    /// Objects to produce per invocation
    #[serde(default = "default_objects")]
    pub objects: u32,

    /// Interval between invocations, in milliseconds (host-enforced)
    #[serde(default = "default_frequency_ms")]
    pub frequency_ms: u64,

    /// Field to emit as the record key, enabling key/value pairing
    #[serde(default)]
    pub key_field: Option<String>,

    /// Upper bound for generated key values
    #[serde(default)]
    pub key_value_interval_max: Option<u32>,

    /// Directory holding the generator executable, if not on PATH
    #[serde(default)]
    pub executable_path: Option<String>,

    /// Target schema format for typed output
    #[serde(default)]
    pub format: SchemaFormat,
}

fn default_objects() -> u32 {
    1
}

fn default_frequency_ms() -> u64 {
    5000
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template: None,
            embedded_template: None,
            objects: default_objects(),
            frequency_ms: default_frequency_ms(),
            key_field: None,
            key_value_interval_max: None,
            executable_path: None,
            format: SchemaFormat::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create a config for a named template
    pub fn for_template(template: impl Into<String>) -> Self {
        Self {
            template: Some(template.into()),
            ..Self::default()
        }
    }

    /// Load and validate a config from a YAML file
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::load_from_str(&contents)
    }

    /// Load and validate a config from a YAML string
    pub fn load_from_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.template.as_deref().unwrap_or("").is_empty()
            && self.embedded_template.as_deref().unwrap_or("").is_empty()
        {
            return Err(Error::missing_field("template"));
        }

        if self.objects == 0 {
            return Err(Error::invalid_value("objects", "must be at least 1"));
        }

        if let Some(field) = self.key_field.as_deref() {
            if !FIELD_NAME_RE.is_match(field) {
                return Err(Error::invalid_value(
                    "key_field",
                    format!("'{field}' is not a valid field name"),
                ));
            }
        }

        Ok(())
    }

    /// Upper bound for generated key values, with unset and zero both
    /// falling back to the default.
    pub fn key_interval_max(&self) -> u32 {
        match self.key_value_interval_max {
            Some(v) if v >= 1 => v,
            _ => DEFAULT_KEY_INTERVAL_MAX,
        }
    }

    /// Whether this config uses an embedded template body
    pub fn is_embedded(&self) -> bool {
        self.embedded_template.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// The name used to title inferred message/record types: the template
    /// name, or a fixed placeholder for embedded templates.
    pub fn message_name(&self) -> &str {
        if self.is_embedded() {
            return EMBEDDED_MESSAGE_NAME;
        }
        self.template.as_deref().unwrap_or(EMBEDDED_MESSAGE_NAME)
    }
}
