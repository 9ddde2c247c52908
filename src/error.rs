//! Error types for datagen-source
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for datagen-source
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// General configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with the configuration
        message: String,
    },

    /// A required config field was not provided
    #[error("Missing required config field: {field}")]
    MissingConfigField {
        /// Name of the missing field
        field: String,
    },

    /// A config field was provided but its value is unusable
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue {
        /// Name of the offending field
        field: String,
        /// Why the value was rejected
        message: String,
    },

    /// YAML parsing failed
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON parsing failed
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Object Stream Errors
    // ============================================================================
    /// The object stream is not a valid brace-balanced concatenation
    #[error("Malformed object stream: {message}")]
    MalformedInput {
        /// What the scan found
        message: String,
    },

    // ============================================================================
    // Schema Inference / Normalization Errors
    // ============================================================================
    /// The JSON value has no schema mapping in the requested format
    #[error("Unsupported JSON shape: {shape}")]
    UnsupportedJsonShape {
        /// Human-readable shape name
        shape: String,
    },

    /// A message-typed field carries no type reference to resolve
    #[error("Unresolved type reference for field '{field}'")]
    UnresolvedTypeReference {
        /// Name of the field with the dangling reference
        field: String,
    },

    /// An array schema arrived without an item type
    #[error("Array schema has no items definition")]
    EmptyArraySchema,

    // ============================================================================
    // Materialization Errors
    // ============================================================================
    /// A JSON value did not match its declared primitive kind
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The declared primitive kind
        expected: String,
        /// The JSON shape actually found
        found: String,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Underlying I/O failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Catch-all error with a plain message
    #[error("{0}")]
    Other(String),

    /// Opaque error bubbled up from a caller-provided source
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a malformed input error
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
        }
    }

    /// Create an unsupported JSON shape error
    pub fn unsupported_shape(shape: impl Into<String>) -> Self {
        Self::UnsupportedJsonShape {
            shape: shape.into(),
        }
    }

    /// Create an unresolved type reference error
    pub fn unresolved_reference(field: impl Into<String>) -> Self {
        Self::UnresolvedTypeReference {
            field: field.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// Result type alias for datagen-source
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("template");
        assert_eq!(err.to_string(), "Missing required config field: template");

        let err = Error::type_mismatch("boolean", "string");
        assert_eq!(
            err.to_string(),
            "Type mismatch: expected boolean, found string"
        );

        let err = Error::unresolved_reference("payload");
        assert_eq!(
            err.to_string(),
            "Unresolved type reference for field 'payload'"
        );

        assert_eq!(
            Error::EmptyArraySchema.to_string(),
            "Array schema has no items definition"
        );
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
