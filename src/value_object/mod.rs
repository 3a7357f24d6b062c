//! The value object contract
//!
//! A value object is an immutable wrapper around exactly one [`RawValue`]. The
//! contract is deliberately small: expose the raw value, and build an instance
//! from a raw value (validating it). Everything else - string conversion, JSON,
//! equality - is derived from `value()` by the provided methods here, the helpers
//! in [`crate::base`], and `#[derive(ValueObject)]`.
//!
//! ## Example
//!
//! ```rust
//! use valuecast::{ValidationError, ValueObject};
//!
//! #[derive(Debug, Clone, ValueObject)]
//! pub struct Gender {
//!     value: String,
//! }
//!
//! impl Gender {
//!     pub fn new(value: String) -> Result<Self, ValidationError> {
//!         if value != "m" && value != "w" {
//!             return Err(ValidationError::new(format!(
//!                 "Invalid gender value: {value}. Must be 'm' or 'w'."
//!             )));
//!         }
//!         Ok(Self { value })
//!     }
//! }
//!
//! let gender = Gender::make("w".to_string()).unwrap();
//! assert_eq!(gender.value(), "w");
//! assert_eq!(gender.to_string(), "w");
//! assert!(Gender::make("x".to_string()).is_err());
//! ```

mod any;
mod error;

pub use any::AnyValueObject;
pub use error::ValidationError;

use std::fmt;

use serde::Serialize;

use crate::base;
use crate::value::RawValue;

/// Capability contract for typed column values.
///
/// `Display` and `Serialize` are part of the contract: a value object renders
/// as its raw value, both as a string and as JSON. `#[derive(ValueObject)]`
/// implements them (and `PartialEq`) on top of [`ValueObject::value`].
pub trait ValueObject: Clone + fmt::Debug + fmt::Display + Serialize + Send + Sync + 'static {
    /// The wrapped primitive.
    type Raw: RawValue;

    /// Name used when registering this type for name-based cast configuration.
    const NAME: &'static str;

    /// Get the raw value of the value object.
    fn value(&self) -> &Self::Raw;

    /// Create a new instance from a raw value.
    ///
    /// Must validate `raw` and be deterministic: the same input always yields
    /// an equal instance or the same error.
    fn make(raw: Self::Raw) -> Result<Self, ValidationError>;

    /// Consume the value object, returning its raw value.
    fn into_raw(self) -> Self::Raw {
        self.value().clone()
    }

    /// The string form, following the stringable / scalar / JSON fallback order.
    fn to_string_value(&self) -> String {
        base::stringify(self.value())
    }

    /// Encode the raw value as JSON text.
    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self.value())
    }

    /// Encode the raw value as indented JSON text.
    fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self.value())
    }

    /// The raw value as a JSON tree, unwrapped.
    fn json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.value())
    }

    /// Structural equality over the raw value.
    ///
    /// Auxiliary fields a concrete type may carry are ignored.
    fn equals(&self, other: &Self) -> bool {
        self.value() == other.value()
    }

    /// Inversion of [`ValueObject::equals`].
    fn not_equals(&self, other: &Self) -> bool {
        !self.equals(other)
    }
}
