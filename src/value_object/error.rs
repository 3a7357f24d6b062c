//! Error raised when a raw value fails a value object's construction rules.

use thiserror::Error;

/// A raw value was rejected by a value object's constructor.
///
/// Concrete value objects build this with a message naming the offending
/// value and the accepted domain, e.g. `Invalid gender value: x. Must be 'm' or 'w'.`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
