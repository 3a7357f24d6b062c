//! Object-safe view of a value object, used by name-based cast tables.

use std::any::Any;
use std::fmt;

use sea_query::Value;

use crate::value::ValueType;
use crate::value_object::ValueObject;

/// A value object whose concrete type is only known at runtime.
///
/// Implemented for every [`ValueObject`]. Equality through this trait follows
/// the contract: two values are equal only when they have the same concrete
/// type and equal raw values.
pub trait AnyValueObject: fmt::Debug + fmt::Display + Send + Sync {
    /// Registration name of the concrete type.
    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    /// The raw value in its storage form.
    fn storage_value(&self) -> Value;

    /// The raw value as JSON, unwrapped.
    fn to_json_value(&self) -> serde_json::Result<serde_json::Value>;

    fn dyn_eq(&self, other: &dyn AnyValueObject) -> bool;

    fn clone_box(&self) -> Box<dyn AnyValueObject>;
}

impl<T: ValueObject> AnyValueObject for T {
    fn type_name(&self) -> &'static str {
        T::NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn storage_value(&self) -> Value {
        self.value().clone().into_value()
    }

    fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        self.json_value()
    }

    fn dyn_eq(&self, other: &dyn AnyValueObject) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self.equals(other))
    }

    fn clone_box(&self) -> Box<dyn AnyValueObject> {
        Box::new(self.clone())
    }
}

impl dyn AnyValueObject {
    /// Borrow the concrete value object, if it is a `T`.
    pub fn downcast_ref<T: ValueObject>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn is<T: ValueObject>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

impl PartialEq for dyn AnyValueObject {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other)
    }
}

impl Clone for Box<dyn AnyValueObject> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
