//! Registry of value object types addressable by name
//!
//! Cast tables loaded from configuration name their target types as strings.
//! The registry turns those names into casts; a name that was never registered
//! is a [`ConfigurationError`] at the time the table is built, never later.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

use crate::cast::{AttributeCast, ConfigurationError, ValueObjectCast};
use crate::value_object::ValueObject;

#[derive(Debug, Default, Clone)]
pub struct ValueObjectRegistry {
    casts: HashMap<&'static str, (TypeId, Arc<dyn AttributeCast>)>,
}

impl ValueObjectRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` under [`ValueObject::NAME`].
    ///
    /// Registering the same type twice is a no-op; a different type under an
    /// existing name is rejected.
    pub fn register<T: ValueObject>(&mut self) -> Result<&mut Self, ConfigurationError> {
        let type_id = TypeId::of::<T>();
        match self.casts.get(T::NAME) {
            Some((existing, _)) if *existing == type_id => {}
            Some(_) => return Err(ConfigurationError::DuplicateType(T::NAME.to_string())),
            None => {
                log::debug!("registered value object {}", T::NAME);
                self.casts
                    .insert(T::NAME, (type_id, Arc::new(ValueObjectCast::<T>::new())));
            }
        }
        Ok(self)
    }

    /// Builder form of [`ValueObjectRegistry::register`].
    pub fn with<T: ValueObject>(mut self) -> Result<Self, ConfigurationError> {
        self.register::<T>()?;
        Ok(self)
    }

    /// The cast for the type registered as `type_name`, bound to `field`.
    pub fn resolve(&self, field: &str, type_name: &str) -> Result<Arc<dyn AttributeCast>, ConfigurationError> {
        self.casts
            .get(type_name)
            .map(|(_, cast)| Arc::clone(cast))
            .ok_or_else(|| ConfigurationError::UnknownType {
                field: field.to_string(),
                type_name: type_name.to_string(),
            })
    }

    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.casts.contains_key(type_name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.casts.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
