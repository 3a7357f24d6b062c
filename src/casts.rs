//! Per-model cast tables
//!
//! A [`CastMap`] is the `field -> value object type` table a model declares.
//! It can be built in code with typed casts, or from a name table (usually
//! loaded through [`crate::config::CastsConfig`]) resolved against a
//! [`ValueObjectRegistry`].
//!
//! ```rust
//! use valuecast::{Attribute, CastMap, ValueObject};
//!
//! #[derive(Debug, Clone, ValueObject)]
//! #[value_object(unchecked)]
//! struct Email(String);
//!
//! let casts = CastMap::new().with::<Email>("email");
//! let stored = casts.set("email", Attribute::raw("jane@example.com")).unwrap();
//! let email = casts.get("email", Some(stored)).unwrap().unwrap();
//! assert_eq!(email.to_string(), "jane@example.com");
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use sea_query::Value;

use crate::cast::{Attribute, AttributeCast, CastError, ConfigurationError, ValueObjectCast};
use crate::registry::ValueObjectRegistry;
use crate::value_object::{AnyValueObject, ValueObject};

#[derive(Debug, Default, Clone)]
pub struct CastMap {
    casts: BTreeMap<String, Arc<dyn AttributeCast>>,
}

impl CastMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cast `field` to `T`.
    #[must_use]
    pub fn with<T: ValueObject>(mut self, field: impl Into<String>) -> Self {
        self.insert(field, Arc::new(ValueObjectCast::<T>::new()));
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, cast: Arc<dyn AttributeCast>) {
        self.casts.insert(field.into(), cast);
    }

    /// Build a table from `field -> type name` pairs.
    ///
    /// Every name is resolved here, once; the first unknown name fails the
    /// whole table.
    pub fn from_fields(
        fields: &HashMap<String, String>,
        registry: &ValueObjectRegistry,
    ) -> Result<Self, ConfigurationError> {
        let mut map = Self::new();
        for (field, type_name) in fields {
            map.insert(field.clone(), registry.resolve(field, type_name)?);
        }
        log::debug!("built cast table for {} field(s)", map.casts.len());
        Ok(map)
    }

    #[must_use]
    pub fn cast_for(&self, field: &str) -> Option<&dyn AttributeCast> {
        self.casts.get(field).map(|cast| &**cast)
    }

    /// Mapped field names, in order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.casts.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.casts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.casts.is_empty()
    }

    /// Read hook for `field`.
    pub fn get(&self, field: &str, stored: Option<Value>) -> Result<Option<Box<dyn AnyValueObject>>, CastError> {
        self.require(field)?.get(field, stored)
    }

    /// Write hook for `field`.
    pub fn set(&self, field: &str, attribute: Attribute) -> Result<Value, CastError> {
        self.require(field)?.set(field, attribute)
    }

    fn require(&self, field: &str) -> Result<&dyn AttributeCast, ConfigurationError> {
        self.cast_for(field)
            .ok_or_else(|| ConfigurationError::UnmappedField(field.to_string()))
    }
}
