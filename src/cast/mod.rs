//! Attribute casts between stored column values and value objects
//!
//! [`ValueObjectCast<T>`] is the integration point the persistence layer calls
//! on every read and write of a mapped column. It holds no state: the target
//! type is a type parameter, so binding a cast to something that is not a
//! value object fails to compile rather than at runtime.
//!
//! ## Read
//!
//! A null stays null. Anything else is handed to `T::make`; a validation
//! failure is returned as-is, since it means the stored data itself is bad.
//!
//! ## Write
//!
//! A null stays null. An instance of `T` is already valid and yields its raw
//! value directly. A raw value is validated through `T::make` first, which is
//! what lets application code assign `"w"` where a `Gender` is expected. A
//! failure here names the field being written.
//!
//! ```rust
//! use valuecast::{Candidate, ValidationError, ValueObject, ValueObjectCast};
//!
//! #[derive(Debug, Clone, ValueObject)]
//! struct Gender(String);
//!
//! impl Gender {
//!     fn new(value: String) -> Result<Self, ValidationError> {
//!         match value.as_str() {
//!             "m" | "w" => Ok(Self(value)),
//!             _ => Err(ValidationError::new(format!("Invalid gender value: {value}. Must be 'm' or 'w'."))),
//!         }
//!     }
//! }
//!
//! let cast = ValueObjectCast::<Gender>::new();
//! let stored = cast.write("gender", Some(Candidate::raw("m".to_string()))).unwrap();
//! assert_eq!(stored.as_deref(), Some("m"));
//!
//! let err = cast.write("gender", Some(Candidate::raw("x".to_string()))).unwrap_err();
//! assert!(err.to_string().contains("gender"));
//! ```

mod attribute;
mod error;

pub use attribute::{Attribute, AttributeCast};
pub use error::{CastError, ConfigurationError};

use std::fmt;
use std::marker::PhantomData;

use sea_query::Value;

use crate::base;
use crate::value::{is_null, TryGetable, ValueType};
use crate::value_object::{ValidationError, ValueObject};

/// A value assigned to a cast attribute.
#[derive(Debug, Clone)]
pub enum Candidate<T: ValueObject> {
    /// An already constructed value object.
    Object(T),
    /// A raw value that still needs validation.
    Raw(T::Raw),
}

impl<T: ValueObject> Candidate<T> {
    pub fn raw(raw: impl Into<T::Raw>) -> Self {
        Candidate::Raw(raw.into())
    }
}

impl<T: ValueObject> From<T> for Candidate<T> {
    fn from(object: T) -> Self {
        Candidate::Object(object)
    }
}

/// Bidirectional cast bound to one value object type.
pub struct ValueObjectCast<T> {
    _target: PhantomData<fn() -> T>,
}

impl<T: ValueObject> ValueObjectCast<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }

    /// Registration name of the target type.
    #[must_use]
    pub fn target(&self) -> &'static str {
        T::NAME
    }

    /// Cast a stored raw value to a value object.
    pub fn read(&self, raw: Option<T::Raw>) -> Result<Option<T>, ValidationError> {
        raw.map(T::make).transpose()
    }

    /// Prepare a value for storage, returning the raw value to persist.
    pub fn write(&self, key: &str, candidate: Option<Candidate<T>>) -> Result<Option<T::Raw>, CastError> {
        match candidate {
            None => Ok(None),
            Some(Candidate::Object(object)) => Ok(Some(object.into_raw())),
            Some(Candidate::Raw(raw)) => self.normalize(key, raw).map(Some),
        }
    }

    /// Read hook: cast a column value as handed over by the storage layer.
    ///
    /// `None` and a null of any variant both read as `None`.
    pub fn get(&self, key: &str, stored: Option<Value>) -> Result<Option<T>, CastError> {
        let raw = match stored {
            Some(value) => self.extract(key, value)?,
            None => None,
        };
        log::trace!("casting {} to {}", key, T::NAME);
        Ok(self.read(raw)?)
    }

    /// Write hook: the column value to persist for `candidate`.
    ///
    /// An absent candidate becomes the typed null of the raw type.
    pub fn set(&self, key: &str, candidate: Option<Candidate<T>>) -> Result<Value, CastError> {
        Ok(match self.write(key, candidate)? {
            Some(raw) => raw.into_value(),
            None => <T::Raw as ValueType>::null_value(),
        })
    }

    fn normalize(&self, key: &str, raw: T::Raw) -> Result<T::Raw, CastError> {
        match T::make(raw.clone()) {
            Ok(object) => Ok(object.into_raw()),
            Err(source) => {
                log::debug!("rejected value for {} ({}): {}", key, T::NAME, source);
                Err(CastError::InvalidAttribute {
                    key: key.to_string(),
                    value: base::stringify(&raw),
                    source,
                })
            }
        }
    }

    fn extract(&self, key: &str, value: Value) -> Result<Option<T::Raw>, CastError> {
        if is_null(&value) {
            return Ok(None);
        }
        <T::Raw as TryGetable>::try_get_opt(value).map_err(|source| CastError::Extraction {
            key: key.to_string(),
            source,
        })
    }
}

impl<T: ValueObject> Default for ValueObjectCast<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for ValueObjectCast<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ValueObjectCast<T> {}

impl<T: ValueObject> fmt::Debug for ValueObjectCast<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueObjectCast").field("target", &T::NAME).finish()
    }
}
