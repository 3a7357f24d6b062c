//! Error types for attribute casts and cast configuration.

use thiserror::Error;

use crate::value::ValueExtractionError;
use crate::value_object::ValidationError;

/// Cast setup failed: a field is bound to something that is not a usable
/// value object type. Raised once, when the cast table is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The configured type name is not registered as a value object
    #[error("The type '{type_name}' configured for field '{field}' is not a registered value object")]
    UnknownType { field: String, type_name: String },
    /// Two different types registered under the same name
    #[error("A different value object is already registered as '{0}'")]
    DuplicateType(String),
    /// No cast table exists for the model
    #[error("No casts are configured for model '{0}'")]
    UnknownModel(String),
    /// The field has no cast
    #[error("No cast is configured for field '{0}'")]
    UnmappedField(String),
    /// Configuration could not be loaded
    #[error("Failed to load cast configuration: {0}")]
    Load(String),
}

/// Error type for attribute cast operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CastError {
    /// Stored data failed validation on read; passed through unchanged
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// An assigned value failed validation on write
    #[error("Invalid value for {key}: {value}. {source}")]
    InvalidAttribute {
        key: String,
        value: String,
        source: ValidationError,
    },
    /// The stored value is not of the raw type the cast expects
    #[error("Invalid stored value for {key}: {source}")]
    Extraction {
        key: String,
        source: ValueExtractionError,
    },
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

impl CastError {
    /// The field this error is attributed to, if any.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            CastError::InvalidAttribute { key, .. } | CastError::Extraction { key, .. } => Some(key.as_str()),
            CastError::Configuration(ConfigurationError::UnmappedField(field))
            | CastError::Configuration(ConfigurationError::UnknownType { field, .. }) => Some(field.as_str()),
            CastError::Validation(_) | CastError::Configuration(_) => None,
        }
    }
}
