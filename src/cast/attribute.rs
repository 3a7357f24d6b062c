//! Object-safe casts for tables that map field names to value object types.

use std::fmt;

use sea_query::Value;

use crate::cast::{CastError, Candidate, ValueObjectCast};
use crate::value_object::{AnyValueObject, ValueObject};

/// A value assigned to an attribute whose cast is only known at runtime.
#[derive(Debug, Clone)]
pub enum Attribute {
    Null,
    /// A value object of any type.
    Object(Box<dyn AnyValueObject>),
    /// A raw column value that still needs validation.
    Raw(Value),
}

impl Attribute {
    pub fn object<T: ValueObject>(object: T) -> Self {
        Attribute::Object(Box::new(object))
    }

    pub fn raw(value: impl Into<Value>) -> Self {
        Attribute::Raw(value.into())
    }
}

/// The read and write hooks of a [`ValueObjectCast`], without its type parameter.
pub trait AttributeCast: fmt::Debug + Send + Sync {
    /// Registration name of the target type.
    fn target(&self) -> &'static str;

    /// Read hook; see [`ValueObjectCast::get`].
    fn get(&self, key: &str, stored: Option<Value>) -> Result<Option<Box<dyn AnyValueObject>>, CastError>;

    /// Write hook; see [`ValueObjectCast::set`].
    ///
    /// An object of the target type passes through unvalidated. An object of
    /// any other type is treated as a raw value: its storage form is validated
    /// like any other raw assignment.
    fn set(&self, key: &str, attribute: Attribute) -> Result<Value, CastError>;
}

impl<T: ValueObject> AttributeCast for ValueObjectCast<T> {
    fn target(&self) -> &'static str {
        T::NAME
    }

    fn get(&self, key: &str, stored: Option<Value>) -> Result<Option<Box<dyn AnyValueObject>>, CastError> {
        let object = Self::get(self, key, stored)?;
        Ok(object.map(|object| Box::new(object) as Box<dyn AnyValueObject>))
    }

    fn set(&self, key: &str, attribute: Attribute) -> Result<Value, CastError> {
        let candidate = match attribute {
            Attribute::Null => None,
            Attribute::Object(object) => match object.downcast_ref::<T>() {
                Some(typed) => Some(Candidate::Object(typed.clone())),
                None => self.extract(key, object.storage_value())?.map(Candidate::Raw),
            },
            Attribute::Raw(value) => self.extract(key, value)?.map(Candidate::Raw),
        };
        Self::set(self, key, candidate)
    }
}
